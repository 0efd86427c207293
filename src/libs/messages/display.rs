//! Display implementation for clearpath application messages.
//!
//! All user-facing text lives here, in one match, so wording stays uniform
//! across commands and every message parameter is formatted explicitly.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created with ID {}", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully", id),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskDeletedPermanently(title) => format!("Task '{}' deleted permanently", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskRestored(title) => format!("Task '{}' restored to ongoing", title),
            Message::TaskMovedToOngoing(title) => format!("Task '{}' moved back to ongoing", title),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskAlreadyCompleted(id) => format!("Task {} is already completed.", id),
            Message::TaskNotCompleted(id) => format!("Task {} is not completed.", id),
            Message::TaskDetailsHeader(id) => format!("Task {}", id),
            Message::OngoingTasksHeader => "Ongoing tasks".to_string(),
            Message::CompletedTasksHeader => "Completed tasks".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete '{}' permanently? This cannot be undone.", title),

            // === VALIDATION MESSAGES ===
            Message::TitleRequired => "A title is required".to_string(),
            Message::InvalidField(field, reason) => format!("{}: {}", field, reason),
            Message::InvalidDeadline(input) => format!("Cannot read '{}' as a date (use YYYY-MM-DD, today or tomorrow)", input),

            // === UNDO MESSAGES ===
            Message::UndoPrompt(secs) => format!("Press Enter within {}s to undo", secs),
            Message::UndoApplied => "Undone".to_string(),
            Message::UndoWindowClosed => "Undo window closed, change is final".to_string(),
            Message::UndoFailed(error) => format!("Undo failed: {}", error),
            Message::AutoCommitFailed(error) => format!("Failed to finalize change: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleUndo => "Undo settings".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),

            // === DATABASE MESSAGES ===
            Message::StorageFailed(error) => format!("Storage error: {}", error),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptTaskDescription => "Enter description".to_string(),
            Message::PromptTaskDeadline => "Enter deadline (YYYY-MM-DD, today, tomorrow or empty)".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptUndoWindow => "Undo window (seconds)".to_string(),
            Message::PromptDbFile => "Database file".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseVersion(version) => format!("Database version: v{}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration; it runs on the next command that opens the database".to_string(),
            Message::MigrationHistory => "Migration history".to_string(),
        };
        write!(f, "{}", text)
    }
}
