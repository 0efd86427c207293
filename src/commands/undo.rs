//! Interactive undo prompt shared by the transition commands.
//!
//! After a transition the command waits for the undo window: pressing Enter
//! reverts the change, otherwise the handle is committed before the process
//! exits. Stdin is read on a plain thread because a blocking read would
//! otherwise keep the runtime alive past the window.

use crate::{
    libs::{messages::Message, transition::UndoHandle},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use std::io::BufRead;
use tokio::sync::oneshot;

pub async fn offer(handle: UndoHandle) -> Result<()> {
    msg_info!(Message::UndoPrompt(handle.window().as_secs().max(1)));

    let (tx, rx) = oneshot::channel::<()>();
    std::thread::spawn(move || {
        let mut line = String::new();
        // EOF or a read error drops the sender; that is not an undo request.
        if let Ok(read) = std::io::stdin().lock().read_line(&mut line) {
            if read > 0 {
                let _ = tx.send(());
            }
        }
    });

    tokio::select! {
        Ok(()) = rx => match handle.undo().await {
            Ok(_) => msg_success!(Message::UndoApplied),
            Err(e) if e.is_not_found() => msg_info!(Message::UndoWindowClosed),
            Err(e) => msg_error!(Message::UndoFailed(e.to_string())),
        },
        _ = tokio::time::sleep(handle.remaining()) => {
            if let Err(e) = handle.commit().await {
                msg_error!(Message::AutoCommitFailed(e.to_string()));
                return Err(e.into());
            }
            msg_info!(Message::UndoWindowClosed);
        }
    }

    Ok(())
}
