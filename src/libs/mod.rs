//! Core library modules for the clearpath application.
//!
//! ## Features
//!
//! - **Task Model**: Records, drafts, normalization, filters and sort order
//! - **Task Service**: Validated CRUD and the combined list view over a store
//! - **Transitions**: Complete/restore/delete with a timed undo window
//! - **Infrastructure**: Configuration, data storage, messaging, errors
//! - **User Interface**: Console tables and deadline input parsing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clearpath::db::tasks::Tasks;
//! use clearpath::libs::service::TaskService;
//! use clearpath::libs::task::TaskDraft;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let service = TaskService::new(Tasks::new()?);
//! service.add_task(TaskDraft::new("Implement feature").deadline("2024/1/5")).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod deadline;
pub mod error;
pub mod messages;
pub mod service;
pub mod store;
pub mod task;
pub mod transition;
pub mod view;
