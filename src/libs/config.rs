//! Configuration for the remote collection and the task store.
//!
//! Settings live in `config.json` inside the platform data directory:
//!
//! - **Linux**: `~/.local/share/taskmirror/config.json`
//! - **macOS**: `~/Library/Application Support/taskmirror/config.json`
//! - **Windows**: `%LOCALAPPDATA%\taskmirror\config.json`
//!
//! A missing file is not an error; the defaults point at the public
//! JSONPlaceholder `todos` collection. Every field carries a serde default so
//! a partially written file still loads.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmirror::libs::config::Config;
//!
//! let config = Config::read()?;
//! let settings = config.store_settings();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::store::{StoreSettings, DEFAULT_BOOTSTRAP_LIMIT, DEFAULT_LOCAL_ID_START, DEFAULT_SNAPSHOT_BUFFER};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/todos";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Collection URL; items are addressed as `{api_url}/{id}`
    pub api_url: String,

    /// How many leading tasks of the remote list bootstrap keeps.
    ///
    /// The remote list can be large; a bounded prefix keeps the session
    /// small and the initial listing deterministic.
    pub bootstrap_limit: usize,

    /// First id assigned to tasks created during the session
    pub local_id_start: u64,

    /// Per-request HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Snapshots buffered per subscriber
    pub snapshot_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            bootstrap_limit: DEFAULT_BOOTSTRAP_LIMIT,
            local_id_start: DEFAULT_LOCAL_ID_START,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            snapshot_buffer: DEFAULT_SNAPSHOT_BUFFER,
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory, falling back to
    /// defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            bootstrap_limit: self.bootstrap_limit,
            local_id_start: self.local_id_start,
            snapshot_buffer: self.snapshot_buffer,
        }
    }

    /// Runs the interactive setup wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleRemote);
        Ok(Config {
            api_url: Input::with_theme(&theme)
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(current.api_url)
                .interact_text()?,
            bootstrap_limit: Input::with_theme(&theme)
                .with_prompt(Message::PromptBootstrapLimit.to_string())
                .default(current.bootstrap_limit)
                .interact_text()?,
            local_id_start: Input::with_theme(&theme)
                .with_prompt(Message::PromptLocalIdStart.to_string())
                .default(current.local_id_start)
                .interact_text()?,
            timeout_secs: Input::with_theme(&theme)
                .with_prompt(Message::PromptTimeoutSecs.to_string())
                .default(current.timeout_secs)
                .interact_text()?,
            snapshot_buffer: current.snapshot_buffer,
        })
    }
}
