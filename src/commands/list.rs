use super::{open_service, report};
use crate::{
    libs::{
        messages::Message,
        service::TaskView,
        task::{Partition, SortOrder, TaskColor},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show completed tasks instead of ongoing ones
    #[arg(long)]
    completed: bool,
    /// Only tasks with this color
    #[arg(short, long, value_enum)]
    color: Option<TaskColor>,
    /// Case-insensitive text in title, description or deadline
    #[arg(short, long)]
    search: Option<String>,
    /// Order by deadline; tasks without one always come last
    #[arg(long, value_enum, default_value_t = SortOrder::None)]
    sort: SortOrder,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let partition = if args.completed { Partition::Completed } else { Partition::Ongoing };
    let view = TaskView::new(partition).color(args.color).search(args.search.as_deref()).sort(args.sort);

    let tasks = match open_service()?.apply_combined_view(&view).await {
        Ok(tasks) => tasks,
        Err(e) => return report(e),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let header = match partition {
        Partition::Ongoing => Message::OngoingTasksHeader,
        Partition::Completed => Message::CompletedTasksHeader,
    };
    msg_print!(header, true);
    View::tasks(&tasks)
}
