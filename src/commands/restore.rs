use super::{open_coordinator, report, undo};
use crate::{
    libs::{messages::Message, task::TaskId},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RestoreArgs {
    id: TaskId,
    /// Delete and re-insert as a new ongoing task instead of flipping the flag
    #[arg(long)]
    reinsert: bool,
}

pub async fn cmd(args: RestoreArgs) -> Result<()> {
    let coordinator = open_coordinator()?;
    let task = match coordinator.service().require_task(args.id).await {
        Ok(task) => task,
        Err(e) => return report(e),
    };
    if !task.is_done {
        msg_error!(Message::TaskNotCompleted(task.id));
        return Ok(());
    }

    let requested = if args.reinsert {
        coordinator.request_move_to_ongoing(&task).await
    } else {
        coordinator.request_restore(&task).await
    };
    let handle = match requested {
        Ok(handle) => handle,
        Err(e) => return report(e),
    };

    if args.reinsert {
        msg_success!(Message::TaskMovedToOngoing(task.title));
    } else {
        msg_success!(Message::TaskRestored(task.title));
    }

    undo::offer(handle).await
}
