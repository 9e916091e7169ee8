//! # Taskmirror
//!
//! A small to-do manager whose task list lives in memory for the session and
//! is mirrored, best-effort, to a remote REST collection.
//!
//! ## Features
//!
//! - **Optimistic Store**: Create, update and delete apply locally and publish
//!   at once; the remote write follows in the background
//! - **Snapshot Subscriptions**: Views receive the latest snapshot on
//!   subscribe and every later one in order
//! - **Remote Fallback**: Lookups by id fall back to the remote collection
//! - **Terminal Views**: Filterable task table and an interactive session
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmirror::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
