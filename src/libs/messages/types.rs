#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(u64),
    TaskNotFound(u64),
    TasksHeader(usize, usize), // shown, total
    NoTasksMatch,
    NoTasksToSelect,
    NewTaskHeader,
    EditTaskHeader(u64),
    RemoteSyncFailed(String),

    // === STORE MESSAGES ===
    BootstrapLoaded(usize, String), // count, url
    BootstrapFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleRemote,

    // === SESSION MESSAGES ===
    SessionStarted,
    SessionEnded,
    MenuListTasks,
    MenuNewTask,
    MenuEditTask,
    MenuDeleteTask,
    MenuQuit,

    // === PROMPTS ===
    PromptApiUrl,
    PromptBootstrapLimit,
    PromptLocalIdStart,
    PromptTimeoutSecs,
    PromptSessionAction,
    PromptSearch,
    PromptOnlyIncomplete,
    PromptSelectTask,
    PromptTaskTitle,
    PromptTaskCompleted,
    ConfirmDeleteTask(String),
}
