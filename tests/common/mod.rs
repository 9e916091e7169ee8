#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use taskmirror::api::TaskGateway;
use taskmirror::libs::error::StoreError;
use taskmirror::libs::store::{StoreSettings, TaskStore};
use taskmirror::libs::task::{Task, TaskId};

/// Id the fake remote hands back for every create, like a service that
/// acknowledges writes without storing them.
pub const ECHOED_CREATE_ID: TaskId = TaskId(201);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    FetchAll,
    FetchOne(TaskId),
    Create(Task),
    Update(TaskId, Task),
    Delete(TaskId),
}

/// In-memory remote collection that never persists writes.
#[derive(Default)]
pub struct FakeGateway {
    remote: Mutex<Vec<Task>>,
    calls: Mutex<Vec<RemoteCall>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FakeGateway {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            remote: Mutex::new(tasks),
            ..Default::default()
        }
    }

    /// Remote holding tasks `1..=count`; even ids are completed.
    pub fn numbered(count: u64) -> Self {
        let tasks = (1..=count)
            .map(|id| Task {
                id: TaskId(id),
                title: format!("remote task {}", id),
                completed: id % 2 == 0,
                owner: Some(1 + id / 10),
            })
            .collect();
        Self::with_tasks(tasks)
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().clone()
    }

    pub fn write_calls(&self) -> Vec<RemoteCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, RemoteCall::Create(_) | RemoteCall::Update(..) | RemoteCall::Delete(_)))
            .collect()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().push(call);
    }

    fn read_guard(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn write_guard(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("remote answered 500 Internal Server Error".to_string()));
        }
        Ok(())
    }
}

impl TaskGateway for FakeGateway {
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        self.record(RemoteCall::FetchAll);
        self.read_guard()?;
        Ok(self.remote.lock().clone())
    }

    async fn fetch_one(&self, id: TaskId) -> Result<Task, StoreError> {
        self.record(RemoteCall::FetchOne(id));
        self.read_guard()?;
        let remote = self.remote.lock();
        remote.iter().find(|task| task.id == id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn create_remote(&self, candidate: &Task) -> Result<Task, StoreError> {
        self.record(RemoteCall::Create(candidate.clone()));
        self.write_guard()?;
        Ok(Task {
            id: ECHOED_CREATE_ID,
            ..candidate.clone()
        })
    }

    async fn update_remote(&self, id: TaskId, candidate: &Task) -> Result<Task, StoreError> {
        self.record(RemoteCall::Update(id, candidate.clone()));
        self.write_guard()?;
        Ok(candidate.clone())
    }

    async fn delete_remote(&self, id: TaskId) -> Result<(), StoreError> {
        self.record(RemoteCall::Delete(id));
        self.write_guard()
    }
}

/// Store over a remote of `remote_count` numbered tasks, bootstrapped with
/// the default prefix of 20.
pub async fn bootstrapped_store(remote_count: u64) -> TaskStore<FakeGateway> {
    let store = TaskStore::new(FakeGateway::numbered(remote_count), StoreSettings::default());
    store.bootstrap().await.unwrap();
    store
}

pub fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|task| task.id.0).collect()
}
