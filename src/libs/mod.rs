//! Core library modules.
//!
//! - **Model**: [`task`] holds the task entity, partial updates and the list
//!   filter
//! - **Store**: [`store`] is the authoritative in-memory collection, with
//!   [`snapshot`] publishing its state to views
//! - **Views**: [`editor`] models the detail form, [`view`] renders tables
//! - **Infrastructure**: configuration, data directory, errors and messages
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmirror::api::HttpGateway;
//! use taskmirror::libs::{config::Config, store::TaskStore, task::TaskQuery};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let store = TaskStore::new(HttpGateway::new(&config)?, config.store_settings());
//! store.bootstrap().await?;
//!
//! let mut list = store.observe();
//! let open = list.next_filtered(&TaskQuery::new("", true)).await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod editor;
pub mod error;
pub mod messages;
pub mod snapshot;
pub mod store;
pub mod task;
pub mod view;
