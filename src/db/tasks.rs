//! SQLite-backed task storage.
//!
//! Partition and color predicates are pushed into SQL; the free-text
//! predicate and the deadline ordering are applied to the id-ordered scan
//! in Rust, so matching is Unicode case-insensitive and equal deadlines keep
//! newest-first order.
//!
//! ## Usage
//!
//! ```rust
//! use clearpath::db::{db::Db, tasks::Tasks};
//! use clearpath::libs::store::TaskStore;
//! use clearpath::libs::task::{TaskDraft, TaskQuery};
//!
//! let mut tasks = Tasks::from_db(Db::open_in_memory()?);
//! let id = tasks.insert(&TaskDraft::new("Review code").normalize()?)?;
//! assert_eq!(tasks.list(&TaskQuery::all())?[0].id, id);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::error::{Result, TaskError};
use crate::libs::store::TaskStore;
use crate::libs::task::{Task, TaskId, TaskQuery};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, deadline, is_done, color, image_uri) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, deadline = ?4, is_done = ?5, color = ?6, image_uri = ?7 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, description, deadline, is_done, color, image_uri FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_NEWEST_FIRST: &str = "ORDER BY id DESC";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Opens the configured database.
    pub fn new() -> anyhow::Result<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Tasks {
        Tasks { conn: db.conn }
    }

    fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            deadline: row.get(3)?,
            is_done: row.get(4)?,
            color: row.get(5)?,
            image_uri: row.get(6)?,
        })
    }
}

impl TaskStore for Tasks {
    fn insert(&mut self, task: &Task) -> Result<TaskId> {
        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.deadline, task.is_done, task.color, task.image_uri],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(task_id = id, "task inserted");

        Ok(id)
    }

    fn update(&mut self, task: &Task) -> Result<()> {
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![task.id, task.title, task.description, task.deadline, task.is_done, task.color, task.image_uri],
        )?;
        if affected == 0 {
            return Err(TaskError::NotFound(task.id));
        }
        tracing::debug!(task_id = task.id, is_done = task.is_done, "task updated");

        Ok(())
    }

    fn delete(&mut self, task: &Task) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![task.id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(task.id));
        }
        tracing::debug!(task_id = task.id, "task deleted");

        Ok(())
    }

    fn get_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::row_to_task)
            .optional()
            .map_err(Into::into)
    }

    fn list(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();
        if let Some(is_done) = query.is_done {
            conditions.push("is_done = ?");
            values.push(Value::Integer(is_done as i64));
        }
        if let Some(color) = query.color {
            conditions.push("color = ?");
            values.push(Value::Text(color.as_str().to_string()));
        }

        let sql = if conditions.is_empty() {
            format!("{} {}", SELECT_TASKS, ORDER_NEWEST_FIRST)
        } else {
            format!("{} WHERE {} {}", SELECT_TASKS, conditions.join(" AND "), ORDER_NEWEST_FIRST)
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(values.iter()), Self::row_to_task)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            let task = task_result?;
            if query.accepts(&task) {
                tasks.push(task);
            }
        }
        query.order.sort(&mut tasks);

        Ok(tasks)
    }
}
