//! Database layer for the clearpath application.
//!
//! SQLite persistence for task records: connection management, versioned
//! schema migrations and the [`tasks::Tasks`] store.
//!
//! ## Usage
//!
//! ```rust
//! use clearpath::db::{db::Db, tasks::Tasks};
//!
//! let tasks = Tasks::from_db(Db::open_in_memory()?);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and initialization.
pub mod db;

/// Versioned schema changes and the migration history table.
pub mod migrations;

/// Task records: CRUD and predicate queries.
pub mod tasks;
