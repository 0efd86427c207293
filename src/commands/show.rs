use super::{open_service, report};
use crate::{
    libs::{messages::Message, task::TaskId, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    id: TaskId,
}

pub async fn cmd(args: ShowArgs) -> Result<()> {
    let task = match open_service()?.require_task(args.id).await {
        Ok(task) => task,
        Err(e) => return report(e),
    };

    msg_print!(Message::TaskDetailsHeader(task.id), true);
    View::task_details(&task)
}
