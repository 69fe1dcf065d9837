//! Command orchestration helpers from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::notifications::{NotificationStack, Severity};

/// Queue a command for the backend worker. Returns whether the command was
/// accepted; callers must not enter a loading state for a rejected command,
/// since no terminal event will ever arrive for it.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    notifications: &mut NotificationStack,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::Generate { .. } => "generate",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            notifications.notify("Backend queue is full; please retry.", Severity::Error);
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            notifications.notify(
                "Backend worker is not running; restart the app.",
                Severity::Error,
            );
            false
        }
    }
}
