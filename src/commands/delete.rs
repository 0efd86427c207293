use super::{open_coordinator, report, undo};
use crate::{
    libs::{messages::Message, task::TaskId},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: TaskId,
    /// Delete permanently after confirmation, without undo
    #[arg(short, long)]
    force: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let coordinator = open_coordinator()?;
    let task = match coordinator.service().require_task(args.id).await {
        Ok(task) => task,
        Err(e) => return report(e),
    };

    if args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
        if let Err(e) = coordinator.service().delete_task(&task).await {
            return report(e);
        }
        msg_success!(Message::TaskDeletedPermanently(task.title));
        return Ok(());
    }

    let handle = match coordinator.request_delete(&task).await {
        Ok(handle) => handle,
        Err(e) => return report(e),
    };
    msg_success!(Message::TaskDeleted(task.title));

    undo::offer(handle).await
}
