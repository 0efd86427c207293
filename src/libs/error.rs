//! Error taxonomy for the task core.
//!
//! Every failure is local to the single requested operation and leaves the
//! store in its last-committed state. The three kinds map directly onto how a
//! collaborator reacts:
//!
//! - [`TaskError::Validation`]: reject before touching the store and point at
//!   the offending field.
//! - [`TaskError::NotFound`]: the referenced record (or undo token) is gone.
//! - [`TaskError::Storage`]: persistence failed; no automatic retry.

use super::task::TaskId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Task with ID {0} not found")]
    NotFound(TaskId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl TaskError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        TaskError::Validation { field, reason: reason.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation { .. })
    }
}

impl From<rusqlite::Error> for TaskError {
    fn from(err: rusqlite::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

impl From<tokio::task::JoinError> for TaskError {
    fn from(err: tokio::task::JoinError) -> Self {
        TaskError::Storage(format!("background worker failed: {}", err))
    }
}

impl From<anyhow::Error> for TaskError {
    fn from(err: anyhow::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
