//! Error taxonomy of the task store and its remote gateway.
//!
//! From a caller's point of view the remote could not be reached (or
//! answered with a failure status), the task in question does not exist, or
//! the local id counter has run out. Background propagation errors use the same type
//! but never reach the caller of a mutation; they are logged and surfaced only
//! through [`Propagation::outcome`](crate::libs::store::Propagation::outcome).

use super::task::TaskId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Network or protocol failure talking to the remote collection.
    #[error("remote collection unavailable: {0}")]
    Transport(String),

    /// The id is absent locally and, where a fallback applies, remotely.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// Every local id up to `u64::MAX` has been handed out.
    #[error("no local task ids left")]
    IdsExhausted,
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}
