pub mod init;
pub mod list;
pub mod session;
pub mod show;

use crate::api::HttpGateway;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_error, msg_info};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List tasks with optional search and status filter")]
    List(list::ListArgs),
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "Interactive session: create, edit and delete tasks")]
    Session,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Override the task collection URL from the configuration
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args, open_store(cli.api_url).await?).await,
            Commands::Show(args) => show::cmd(args, open_store(cli.api_url).await?).await,
            Commands::Session => session::cmd(open_store(cli.api_url).await?).await,
        }
    }
}

/// Builds the store from configuration and bootstraps it once.
///
/// A failed bootstrap is reported but not fatal: the store stays empty and
/// remote lookups by id still work.
pub async fn open_store(api_url: Option<String>) -> Result<TaskStore<HttpGateway>> {
    let mut config = Config::read()?;
    if let Some(api_url) = api_url {
        config.api_url = api_url;
    }

    let store = TaskStore::new(HttpGateway::new(&config)?, config.store_settings());
    match store.bootstrap().await {
        Ok(count) => msg_info!(Message::BootstrapLoaded(count, config.api_url.clone())),
        Err(err) => msg_error!(Message::BootstrapFailed(err.to_string())),
    }
    Ok(store)
}
