pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

use crate::libs::error::TaskError;

/// Maps a core error onto the message shown to the user.
pub fn from_task_error(err: &TaskError) -> Message {
    match err {
        TaskError::Validation { field: "title", .. } => Message::TitleRequired,
        TaskError::Validation { field, reason } => Message::InvalidField(field.to_string(), reason.clone()),
        TaskError::NotFound(id) => Message::TaskNotFoundWithId(*id),
        TaskError::Storage(error) => Message::StorageFailed(error.clone()),
    }
}
