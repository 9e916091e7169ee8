//! Detail view model: edit one task, then save or delete it.
//!
//! An editor is opened by id. Id `0` means "new task" and starts from a blank
//! draft without touching the store; any other id is loaded through
//! [`TaskStore::get_by_id`], so it may come from memory or from the remote
//! fallback. Saving creates or updates through the store, which applies the
//! change optimistically and waits for the remote write to settle.

use super::error::StoreError;
use super::store::{Settled, TaskStore};
use super::task::{Task, TaskId, TaskPatch};
use crate::api::TaskGateway;

/// Id the detail view uses for "not yet created".
pub const NEW_TASK_ID: TaskId = TaskId(0);

/// Editable fields of the detail form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub completed: bool,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        TaskDraft {
            title: task.title.clone(),
            completed: task.completed,
        }
    }
}

impl From<&TaskDraft> for TaskPatch {
    fn from(draft: &TaskDraft) -> Self {
        TaskPatch::title(&draft.title).with_completed(draft.completed)
    }
}

pub struct TaskEditor<'a, G: TaskGateway> {
    store: &'a TaskStore<G>,
    id: TaskId,
    draft: TaskDraft,
}

impl<'a, G: TaskGateway> TaskEditor<'a, G> {
    /// # Errors
    ///
    /// `StoreError::NotFound` when an existing id can be resolved neither
    /// locally nor remotely.
    pub async fn open(store: &'a TaskStore<G>, id: TaskId) -> Result<Self, StoreError> {
        let draft = if id == NEW_TASK_ID {
            TaskDraft::default()
        } else {
            TaskDraft::from(&store.get_by_id(id).await?)
        };
        Ok(Self { store, id, draft })
    }

    pub fn is_new(&self) -> bool {
        self.id == NEW_TASK_ID
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.draft.completed = completed;
    }

    /// Creates or updates the task from the draft.
    ///
    /// After the first save of a new task the editor switches to editing
    /// the created task, so a second save updates instead of duplicating.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when updating a task that is no longer in
    /// memory (for example one that was only resolved remotely), and
    /// `StoreError::IdsExhausted` when no local id is left for a new one.
    pub async fn save(&mut self) -> Result<Settled<Task>, StoreError> {
        let patch = TaskPatch::from(&self.draft);
        let saved = if self.is_new() {
            self.store.create_task(patch)?.outcome().await
        } else {
            self.store.update_task(self.id, patch)?.outcome().await
        };
        self.id = saved.value.id;
        Ok(saved)
    }

    /// Deletes the task being edited. Returns `None` for an unsaved draft.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when the task is not in memory.
    pub async fn delete(self) -> Result<Option<Settled<()>>, StoreError> {
        if self.is_new() {
            return Ok(None);
        }
        Ok(Some(self.store.remove_task(self.id)?.outcome().await))
    }
}
