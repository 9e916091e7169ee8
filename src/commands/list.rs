use crate::api::TaskGateway;
use crate::libs::{messages::Message, store::TaskStore, task::TaskQuery, view::View};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text to look for in task titles
    #[arg(short, long, default_value = "")]
    search: String,

    /// Hide completed tasks
    #[arg(short, long)]
    incomplete: bool,
}

pub async fn cmd<G: TaskGateway>(list_args: ListArgs, store: TaskStore<G>) -> Result<()> {
    let query = TaskQuery::new(&list_args.search, list_args.incomplete);
    print_filtered(&store, &query).await;
    Ok(())
}

/// Prints the current snapshot through the list filter.
pub async fn print_filtered<G: TaskGateway>(store: &TaskStore<G>, query: &TaskQuery) {
    let mut subscription = store.observe();
    let (shown, total) = match subscription.next().await {
        Some(snapshot) => (query.apply(&snapshot), snapshot.len()),
        None => (Vec::new(), 0),
    };

    msg_print!(Message::TasksHeader(shown.len(), total), true);
    if shown.is_empty() {
        msg_print!(Message::NoTasksMatch);
    } else {
        View::tasks(&shown);
    }
}
