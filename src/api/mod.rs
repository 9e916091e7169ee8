//! Remote task collection access.
//!
//! The store talks to the remote collection only through [`TaskGateway`], a
//! pure transport capability set: list, read one, create, update and delete.
//! Implementations keep no state and no cache. [`http::HttpGateway`] speaks
//! the conventional REST mapping over `reqwest`; tests substitute an
//! in-memory double.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmirror::api::{HttpGateway, TaskGateway};
//! use taskmirror::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let gateway = HttpGateway::new(&Config::default())?;
//! let tasks = gateway.fetch_all().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::StoreError;
use crate::libs::task::{Task, TaskId};
use std::future::Future;

pub mod http;

pub use http::HttpGateway;

/// Capability set of the remote collection.
///
/// Write operations are best-effort: the backing service may accept a call
/// without durably storing anything, so their results are never trusted as
/// the new local state.
pub trait TaskGateway: Send + Sync + 'static {
    /// Reads the whole collection.
    ///
    /// # Errors
    ///
    /// `StoreError::Transport` on network failure or a non-2xx status.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Task>, StoreError>> + Send;

    /// Reads one task.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when the remote has no such id,
    /// `StoreError::Transport` otherwise.
    fn fetch_one(&self, id: TaskId) -> impl Future<Output = Result<Task, StoreError>> + Send;

    fn create_remote(&self, candidate: &Task) -> impl Future<Output = Result<Task, StoreError>> + Send;

    fn update_remote(&self, id: TaskId, candidate: &Task) -> impl Future<Output = Result<Task, StoreError>> + Send;

    fn delete_remote(&self, id: TaskId) -> impl Future<Output = Result<(), StoreError>> + Send;
}
