//! # Clearpath - personal task tracker
//!
//! A task lifecycle and query engine with a command-line front end.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit and inspect tasks with color tags,
//!   deadlines and an optional image reference
//! - **Partitions**: Ongoing and completed lists with color filter, text
//!   search and deadline sort
//! - **Undoable Transitions**: Complete, restore and delete apply at once and
//!   can be reverted during a short window
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clearpath::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
