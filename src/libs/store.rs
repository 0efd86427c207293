//! Storage contract for task records.
//!
//! Implementations are blocking and single-writer; the service moves every
//! call onto Tokio's blocking pool. Each call is atomic on its own and there
//! is no isolation beyond that.

use super::error::Result;
use super::task::{Task, TaskId, TaskQuery};

pub trait TaskStore: Send {
    /// Persists `task` under a fresh id and returns it. The id carried by
    /// `task` is ignored; ids are monotonic and never reused.
    fn insert(&mut self, task: &Task) -> Result<TaskId>;

    /// Replaces the record with the same id. Fails with `NotFound` when the
    /// record does not exist.
    fn update(&mut self, task: &Task) -> Result<()>;

    /// Removes the record with the same id. Fails with `NotFound` when the
    /// record does not exist.
    fn delete(&mut self, task: &Task) -> Result<()>;

    fn get_by_id(&self, id: TaskId) -> Result<Option<Task>>;

    /// Tasks satisfying every predicate of `query`, newest first unless a
    /// deadline order is requested.
    fn list(&self, query: &TaskQuery) -> Result<Vec<Task>>;
}
