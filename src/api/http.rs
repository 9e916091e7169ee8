//! REST transport for the remote task collection.
//!
//! Maps the gateway operations onto the conventional resource layout:
//!
//! | operation       | request                 |
//! |-----------------|-------------------------|
//! | `fetch_all`     | `GET {base}`            |
//! | `fetch_one`     | `GET {base}/{id}`       |
//! | `create_remote` | `POST {base}` + JSON    |
//! | `update_remote` | `PUT {base}/{id}` + JSON|
//! | `delete_remote` | `DELETE {base}/{id}`    |
//!
//! Every request is bounded by the configured timeout. A timed-out call is
//! reported as `StoreError::Transport` like any other network failure.

use super::TaskGateway;
use crate::libs::config::Config;
use crate::libs::error::StoreError;
use crate::libs::task::{Task, TaskId};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpGateway {
    /// HTTP client with connection pooling and the request timeout applied
    client: Client,
    /// Collection URL without a trailing slash
    base_url: String,
}

impl HttpGateway {
    /// Builds a gateway for the collection at `config.api_url`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Transport` if the HTTP client cannot be
    /// constructed (for example when the TLS backend fails to initialize).
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: TaskId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Turns a non-success status into the matching store error.
fn check_status(response: Response, id: Option<TaskId>) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(status_error(status, id))
}

fn status_error(status: StatusCode, id: Option<TaskId>) -> StoreError {
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => StoreError::NotFound(id),
        _ => StoreError::Transport(format!("remote answered {}", status)),
    }
}

impl TaskGateway for HttpGateway {
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        let response = self.client.get(&self.base_url).send().await?;
        let tasks = check_status(response, None)?.json::<Vec<Task>>().await?;
        Ok(tasks)
    }

    async fn fetch_one(&self, id: TaskId) -> Result<Task, StoreError> {
        let response = self.client.get(self.item_url(id)).send().await?;
        let task = check_status(response, Some(id))?.json::<Task>().await?;
        Ok(task)
    }

    async fn create_remote(&self, candidate: &Task) -> Result<Task, StoreError> {
        let response = self.client.post(&self.base_url).json(candidate).send().await?;
        let echoed = check_status(response, None)?.json::<Task>().await?;
        Ok(echoed)
    }

    async fn update_remote(&self, id: TaskId, candidate: &Task) -> Result<Task, StoreError> {
        let response = self.client.put(self.item_url(id)).json(candidate).send().await?;
        let echoed = check_status(response, Some(id))?.json::<Task>().await?;
        Ok(echoed)
    }

    async fn delete_remote(&self, id: TaskId) -> Result<(), StoreError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        check_status(response, Some(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_only_for_addressed_requests() {
        assert_eq!(status_error(StatusCode::NOT_FOUND, Some(TaskId(999))), StoreError::NotFound(TaskId(999)));
        assert!(matches!(status_error(StatusCode::NOT_FOUND, None), StoreError::Transport(_)));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, Some(TaskId(1))),
            StoreError::Transport(_)
        ));
    }

    #[test]
    fn urls_are_built_from_trimmed_base() {
        let config = Config {
            api_url: "https://example.test/todos/".to_string(),
            ..Config::default()
        };
        let gateway = HttpGateway::new(&config).unwrap();
        assert_eq!(gateway.base_url(), "https://example.test/todos");
        assert_eq!(gateway.item_url(TaskId(7)), "https://example.test/todos/7");
    }
}
