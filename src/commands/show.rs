use crate::api::TaskGateway;
use crate::libs::{error::StoreError, messages::Message, store::TaskStore, view::View};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task id; ids outside the loaded prefix are looked up remotely
    #[arg(required = true)]
    id: u64,
}

pub async fn cmd<G: TaskGateway>(show_args: ShowArgs, store: TaskStore<G>) -> Result<()> {
    match store.get_by_id(show_args.id.into()).await {
        Ok(task) => {
            View::tasks(std::slice::from_ref(&task));
            Ok(())
        }
        Err(StoreError::NotFound(id)) => msg_bail_anyhow!(Message::TaskNotFound(id.0)),
        Err(err) => Err(err.into()),
    }
}
