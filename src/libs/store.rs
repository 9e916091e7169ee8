//! Authoritative in-memory task collection with optimistic mutations.
//!
//! The [`TaskStore`] owns the ordered task list for the whole session. Reads
//! are served from memory. Every mutation is applied and published the moment
//! the method is called, before anything touches the network. The matching
//! remote write is then spawned onto the runtime and its result is only logged
//! and reported through [`Propagation::outcome`]. The remote is a mirror that
//! may legitimately reject or drop writes, so nothing is ever rolled back.
//!
//! ## Ordering
//!
//! - Creates insert at index 0, so the newest task is listed first.
//! - Updates replace in place; deletes keep the order of the remaining tasks.
//! - Snapshots are published in exactly the order mutations are applied,
//!   because the collection change and the publish share one lock.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmirror::api::HttpGateway;
//! use taskmirror::libs::config::Config;
//! use taskmirror::libs::store::TaskStore;
//! use taskmirror::libs::task::TaskPatch;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::default();
//! let store = TaskStore::new(HttpGateway::new(&config)?, config.store_settings());
//! store.bootstrap().await?;
//!
//! let created = store.create_task(TaskPatch::title("Buy milk"))?.await;
//! store.update_task(created.id, TaskPatch::completed(true))?.await;
//! # Ok(())
//! # }
//! ```

use super::error::StoreError;
use super::snapshot::{Publisher, Snapshot, Subscription};
use super::task::{Task, TaskId, TaskPatch};
use crate::api::TaskGateway;
use parking_lot::Mutex;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub const DEFAULT_BOOTSTRAP_LIMIT: usize = 20;
pub const DEFAULT_LOCAL_ID_START: u64 = 10001;
pub const DEFAULT_SNAPSHOT_BUFFER: usize = 64;

/// Tunables of a store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSettings {
    /// Number of leading remote tasks kept by bootstrap
    pub bootstrap_limit: usize,
    /// First id handed out to locally created tasks; `0` is reserved for
    /// unsaved drafts and is raised to `1`
    pub local_id_start: u64,
    /// Snapshots buffered per subscriber before it starts lagging
    pub snapshot_buffer: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            bootstrap_limit: DEFAULT_BOOTSTRAP_LIMIT,
            local_id_start: DEFAULT_LOCAL_ID_START,
            snapshot_buffer: DEFAULT_SNAPSHOT_BUFFER,
        }
    }
}

struct StoreState {
    tasks: Vec<Task>,
    next_id: u64,
    publisher: Publisher,
}

impl StoreState {
    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn publish(&mut self) {
        let snapshot: Snapshot = self.tasks.clone().into();
        self.publisher.publish(snapshot);
    }
}

pub struct TaskStore<G: TaskGateway> {
    gateway: Arc<G>,
    settings: StoreSettings,
    state: Mutex<StoreState>,
}

impl<G: TaskGateway> TaskStore<G> {
    /// Creates an empty store. Call [`bootstrap`](Self::bootstrap) once
    /// afterwards to load the initial collection.
    pub fn new(gateway: G, settings: StoreSettings) -> Self {
        Self {
            gateway: Arc::new(gateway),
            settings,
            state: Mutex::new(StoreState {
                tasks: Vec::new(),
                next_id: settings.local_id_start.max(1),
                publisher: Publisher::new(settings.snapshot_buffer),
            }),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn settings(&self) -> StoreSettings {
        self.settings
    }

    /// Loads the remote collection, keeps its first `bootstrap_limit` tasks
    /// and replaces the in-memory collection with them.
    ///
    /// The local id counter is raised past the largest bootstrap id so that
    /// locally created tasks can never collide with it. A task whose id has
    /// no successor (`u64::MAX`) is dropped with a warning.
    ///
    /// # Errors
    ///
    /// The gateway error is returned unchanged and the store is left as it
    /// was. There is no automatic retry.
    pub async fn bootstrap(&self) -> Result<usize, StoreError> {
        let mut tasks = self.gateway.fetch_all().await?;
        tasks.truncate(self.settings.bootstrap_limit);
        dedup_by_id(&mut tasks);
        tasks.retain(|task| {
            let has_successor = task.id.0.checked_add(1).is_some();
            if !has_successor {
                tracing::warn!(id = %task.id, "bootstrap task id leaves no room for local ids, dropped");
            }
            has_successor
        });

        let mut state = self.state.lock();
        if let Some(after_max) = tasks.iter().filter_map(|task| task.id.0.checked_add(1)).max() {
            state.next_id = state.next_id.max(after_max);
        }
        let loaded = tasks.len();
        state.tasks = tasks;
        state.publish();

        tracing::info!(loaded, next_local_id = state.next_id, "task store bootstrapped");
        Ok(loaded)
    }

    /// Subscribes to the snapshot stream. The current snapshot is delivered
    /// first, then every later one.
    pub fn observe(&self) -> Subscription {
        self.state.lock().publisher.subscribe()
    }

    /// Current snapshot without subscribing.
    pub fn snapshot(&self) -> Snapshot {
        self.state.lock().publisher.latest()
    }

    pub fn len(&self) -> usize {
        self.state.lock().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks a task up in memory, falling back to the remote collection.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when the id is not in memory and the remote
    /// lookup fails for any reason.
    pub async fn get_by_id(&self, id: TaskId) -> Result<Task, StoreError> {
        if let Some(task) = self.find_local(id) {
            return Ok(task);
        }

        tracing::debug!(%id, "task not in memory, asking remote");
        match self.gateway.fetch_one(id).await {
            Ok(task) => Ok(task),
            Err(err) => {
                tracing::debug!(%id, error = %err, "remote lookup failed");
                Err(StoreError::NotFound(id))
            }
        }
    }

    pub fn find_local(&self, id: TaskId) -> Option<Task> {
        let state = self.state.lock();
        state.position(id).map(|index| state.tasks[index].clone())
    }

    /// Creates a task with the next local id and puts it at the head of
    /// the collection. Missing fields default to an empty title and
    /// `completed = false`.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// `StoreError::IdsExhausted` once the local counter has reached
    /// `u64::MAX`. Nothing is published in that case.
    pub fn create_task(&self, patch: TaskPatch) -> Result<Propagation<Task>, StoreError> {
        let task = {
            let mut state = self.state.lock();
            let id = TaskId(state.next_id);
            state.next_id = state.next_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
            let task = Task {
                id,
                title: patch.title.unwrap_or_default(),
                completed: patch.completed.unwrap_or(false),
                owner: patch.owner,
            };
            state.tasks.insert(0, task.clone());
            state.publish();
            task
        };

        let gateway = self.gateway.clone();
        let candidate = task.clone();
        let handle = tokio::spawn(async move {
            let result = gateway.create_remote(&candidate).await.map(|_| ());
            report("create", candidate.id, result)
        });

        Ok(Propagation::new(task, handle))
    }

    /// Merges `patch` into the task with `id`, keeping its position.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no task with `id` is in memory.
    pub fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<Propagation<Task>, StoreError> {
        let updated = {
            let mut state = self.state.lock();
            let index = state.position(id).ok_or(StoreError::NotFound(id))?;
            let updated = state.tasks[index].merged(&patch);
            state.tasks[index] = updated.clone();
            state.publish();
            updated
        };

        let gateway = self.gateway.clone();
        let candidate = updated.clone();
        let handle = tokio::spawn(async move {
            let result = gateway.update_remote(candidate.id, &candidate).await.map(|_| ());
            report("update", candidate.id, result)
        });

        Ok(Propagation::new(updated, handle))
    }

    /// Removes the task with `id`.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no task with `id` is in memory.
    pub fn remove_task(&self, id: TaskId) -> Result<Propagation<()>, StoreError> {
        {
            let mut state = self.state.lock();
            let index = state.position(id).ok_or(StoreError::NotFound(id))?;
            state.tasks.remove(index);
            state.publish();
        }

        let gateway = self.gateway.clone();
        let handle = tokio::spawn(async move {
            let result = gateway.delete_remote(id).await;
            report("delete", id, result)
        });

        Ok(Propagation::new((), handle))
    }
}

/// Keeps the first occurrence of every id.
fn dedup_by_id(tasks: &mut Vec<Task>) {
    let mut seen = std::collections::HashSet::new();
    tasks.retain(|task| {
        let fresh = seen.insert(task.id);
        if !fresh {
            tracing::warn!(id = %task.id, "duplicate id in bootstrap payload dropped");
        }
        fresh
    });
}

fn report(operation: &'static str, id: TaskId, result: Result<(), StoreError>) -> Result<(), StoreError> {
    match &result {
        Ok(()) => tracing::debug!(operation, %id, "remote propagation settled"),
        Err(err) => tracing::warn!(operation, %id, error = %err, "remote propagation failed, local state kept"),
    }
    result
}

/// Local value of a mutation together with what its remote write did.
#[derive(Debug)]
pub struct Settled<T> {
    pub value: T,
    pub remote: Result<(), StoreError>,
}

impl<T> Settled<T> {
    /// Whether the remote collection acknowledged the write.
    pub fn is_mirrored(&self) -> bool {
        self.remote.is_ok()
    }
}

/// Handle to a mutation whose local effect is already applied and whose
/// remote write is running in the background.
///
/// Awaiting it yields the local value once the remote call has settled,
/// whatever the remote said. Dropping it detaches the remote write.
pub struct Propagation<T> {
    value: T,
    handle: JoinHandle<Result<(), StoreError>>,
}

impl<T> Propagation<T> {
    fn new(value: T, handle: JoinHandle<Result<(), StoreError>>) -> Self {
        Self { value, handle }
    }

    /// The locally applied value, available without waiting.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Waits for the remote write and reports how it went.
    pub async fn outcome(self) -> Settled<T> {
        let remote = match self.handle.await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "remote propagation task aborted");
                Err(StoreError::Transport(err.to_string()))
            }
        };
        Settled {
            value: self.value,
            remote,
        }
    }
}

impl<T: Send + 'static> IntoFuture for Propagation<T> {
    type Output = T;
    type IntoFuture = Pin<Box<dyn Future<Output = T> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.outcome().await.value })
    }
}
