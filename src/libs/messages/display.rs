//! Display implementation for application messages.
//!
//! All user-facing text lives in this one `match`, so wording stays
//! consistent between the one-shot commands and the interactive session.
//! Parameterized variants interpolate their values here rather than at the
//! call site:
//!
//! ```rust
//! use taskmirror::libs::messages::Message;
//!
//! assert_eq!(Message::TaskDeleted(5).to_string(), "Task #5 deleted");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // Task messages
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskNotFound(id) => format!("Task #{} not found", id),
            Message::TasksHeader(shown, total) => format!("Tasks ({} of {})", shown, total),
            Message::NoTasksMatch => "No tasks match the current filter.".to_string(),
            Message::NoTasksToSelect => "There are no tasks to choose from.".to_string(),
            Message::NewTaskHeader => "New Task".to_string(),
            Message::EditTaskHeader(id) => format!("Edit Task #{}", id),
            Message::RemoteSyncFailed(error) => {
                format!("Saved locally, but the remote collection did not confirm: {}", error)
            }

            // Store messages
            Message::BootstrapLoaded(count, url) => format!("Loaded {} tasks from {}", count, url),
            Message::BootstrapFailed(error) => format!("Failed to load tasks: {}", error),

            // Configuration messages
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration file removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleRemote => "Remote collection settings".to_string(),

            // Session messages
            Message::SessionStarted => "Session started. Changes stay in memory for this session only.".to_string(),
            Message::SessionEnded => "Session ended".to_string(),
            Message::MenuListTasks => "List tasks".to_string(),
            Message::MenuNewTask => "New task".to_string(),
            Message::MenuEditTask => "Edit task".to_string(),
            Message::MenuDeleteTask => "Delete task".to_string(),
            Message::MenuQuit => "Quit".to_string(),

            // Prompts
            Message::PromptApiUrl => "Enter the task collection URL".to_string(),
            Message::PromptBootstrapLimit => "Number of tasks to load at startup".to_string(),
            Message::PromptLocalIdStart => "First id for locally created tasks".to_string(),
            Message::PromptTimeoutSecs => "Request timeout (seconds)".to_string(),
            Message::PromptSessionAction => "What next?".to_string(),
            Message::PromptSearch => "Search tasks (empty for all)".to_string(),
            Message::PromptOnlyIncomplete => "Show only incomplete?".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskCompleted => "Completed?".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
        };
        write!(f, "{}", text)
    }
}
