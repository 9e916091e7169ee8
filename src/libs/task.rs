use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier shared by remote-origin and locally created tasks.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        TaskId(id)
    }
}

/// A single to-do item, in the shape the remote collection speaks.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    /// Opaque reference to the owning user. Never interpreted, only carried.
    #[serde(rename = "userId", alias = "owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<u64>,
}

impl Task {
    pub fn new(id: TaskId, title: &str, completed: bool) -> Self {
        Task {
            id,
            title: title.to_string(),
            completed,
            owner: None,
        }
    }

    /// Returns a copy with every field present in `patch` overwritten.
    pub fn merged(&self, patch: &TaskPatch) -> Self {
        Task {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            completed: patch.completed.unwrap_or(self.completed),
            owner: patch.owner.or(self.owner),
        }
    }
}

/// Partial task used by create and update. Missing fields keep their
/// defaults on create and their current values on update.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<u64>,
}

impl TaskPatch {
    pub fn title(title: &str) -> Self {
        TaskPatch {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        TaskPatch {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn with_owner(mut self, owner: u64) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// List view filter: free-text search over titles plus an
/// "only incomplete" switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub search: String,
    pub only_incomplete: bool,
}

impl TaskQuery {
    pub fn new(search: &str, only_incomplete: bool) -> Self {
        TaskQuery {
            search: search.to_string(),
            only_incomplete,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        let term = self.search.trim().to_lowercase();
        let title_match = term.is_empty() || task.title.to_lowercase().contains(&term);
        let status_match = !self.only_incomplete || !task.completed;
        title_match && status_match
    }

    /// Filters a snapshot, keeping its order.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|task| self.matches(task)).cloned().collect()
    }
}
