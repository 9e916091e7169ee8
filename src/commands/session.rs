//! Interactive session over one bootstrapped store.
//!
//! The store lives for the duration of this command, so this is where the
//! optimistic create/edit/delete flow is actually usable: the list reflects
//! every change immediately, and a remote write that was not confirmed is
//! reported as a warning without undoing the local change.

use super::list;
use crate::api::TaskGateway;
use crate::libs::editor::{TaskEditor, NEW_TASK_ID};
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::store::{Settled, TaskStore};
use crate::libs::task::{TaskId, TaskQuery};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    New,
    Edit,
    Delete,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [Action::List, Action::New, Action::Edit, Action::Delete, Action::Quit];

    fn label(self) -> String {
        let message = match self {
            Action::List => Message::MenuListTasks,
            Action::New => Message::MenuNewTask,
            Action::Edit => Message::MenuEditTask,
            Action::Delete => Message::MenuDeleteTask,
            Action::Quit => Message::MenuQuit,
        };
        message.to_string()
    }
}

pub async fn cmd<G: TaskGateway>(store: TaskStore<G>) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut query = TaskQuery::default();
    msg_info!(Message::SessionStarted);

    loop {
        let labels: Vec<String> = Action::ALL.iter().map(|action| action.label()).collect();
        let selection = Select::with_theme(&theme)
            .with_prompt(Message::PromptSessionAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[selection] {
            Action::List => {
                query = prompt_query(&theme, &query)?;
                list::print_filtered(&store, &query).await;
            }
            Action::New => edit(&store, &theme, NEW_TASK_ID).await?,
            Action::Edit => {
                if let Some(id) = select_task(&store, &theme)? {
                    edit(&store, &theme, id).await?;
                }
            }
            Action::Delete => {
                if let Some(id) = select_task(&store, &theme)? {
                    delete(&store, &theme, id).await?;
                }
            }
            Action::Quit => break,
        }
    }

    msg_info!(Message::SessionEnded);
    Ok(())
}

fn prompt_query(theme: &ColorfulTheme, current: &TaskQuery) -> Result<TaskQuery> {
    let search: String = Input::with_theme(theme)
        .with_prompt(Message::PromptSearch.to_string())
        .default(current.search.clone())
        .allow_empty(true)
        .interact_text()?;
    let only_incomplete = Confirm::with_theme(theme)
        .with_prompt(Message::PromptOnlyIncomplete.to_string())
        .default(current.only_incomplete)
        .interact()?;
    Ok(TaskQuery::new(&search, only_incomplete))
}

fn select_task<G: TaskGateway>(store: &TaskStore<G>, theme: &ColorfulTheme) -> Result<Option<TaskId>> {
    let snapshot = store.snapshot();
    if snapshot.is_empty() {
        msg_warning!(Message::NoTasksToSelect);
        return Ok(None);
    }

    let labels: Vec<String> = snapshot.iter().map(View::label).collect();
    let selection = Select::with_theme(theme)
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(selection.map(|index| snapshot[index].id))
}

async fn edit<G: TaskGateway>(store: &TaskStore<G>, theme: &ColorfulTheme, id: TaskId) -> Result<()> {
    let mut editor = match TaskEditor::open(store, id).await {
        Ok(editor) => editor,
        Err(StoreError::NotFound(id)) => {
            msg_error!(Message::TaskNotFound(id.0));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if editor.is_new() {
        msg_print!(Message::NewTaskHeader, true);
    } else {
        msg_print!(Message::EditTaskHeader(editor.id().0), true);
    }

    let title: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(editor.draft().title.clone())
        .allow_empty(true)
        .interact_text()?;
    let completed = Confirm::with_theme(theme)
        .with_prompt(Message::PromptTaskCompleted.to_string())
        .default(editor.draft().completed)
        .interact()?;
    editor.set_title(&title);
    editor.set_completed(completed);

    let was_new = editor.is_new();
    match editor.save().await {
        Ok(saved) => {
            let title = saved.value.title.clone();
            if was_new {
                msg_success!(Message::TaskCreated(title));
            } else {
                msg_success!(Message::TaskUpdated(title));
            }
            warn_unmirrored(&saved);
        }
        // Resolved from the remote only: it is not part of this session's list.
        Err(StoreError::NotFound(id)) => msg_error!(Message::TaskNotFound(id.0)),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

async fn delete<G: TaskGateway>(store: &TaskStore<G>, theme: &ColorfulTheme, id: TaskId) -> Result<()> {
    let editor = TaskEditor::open(store, id).await?;
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(Message::ConfirmDeleteTask(editor.draft().title.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    if let Some(settled) = editor.delete().await? {
        msg_success!(Message::TaskDeleted(id.0));
        warn_unmirrored(&settled);
    }
    Ok(())
}

fn warn_unmirrored<T>(settled: &Settled<T>) {
    if let Err(err) = &settled.remote {
        msg_warning!(Message::RemoteSyncFailed(err.to_string()));
    }
}
