use super::{open_coordinator, report, undo};
use crate::{
    libs::{messages::Message, task::TaskId},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    id: TaskId,
}

pub async fn cmd(args: CompleteArgs) -> Result<()> {
    let coordinator = open_coordinator()?;
    let task = match coordinator.service().require_task(args.id).await {
        Ok(task) => task,
        Err(e) => return report(e),
    };
    if task.is_done {
        msg_error!(Message::TaskAlreadyCompleted(task.id));
        return Ok(());
    }

    let handle = match coordinator.request_complete(&task).await {
        Ok(handle) => handle,
        Err(e) => return report(e),
    };
    msg_success!(Message::TaskCompleted(task.title));

    undo::offer(handle).await
}
