use crate::libs::task::TaskId;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(TaskId),
    TaskUpdated(TaskId),
    TaskDeleted(String),          // title
    TaskDeletedPermanently(String), // title
    TaskCompleted(String),        // title
    TaskRestored(String),         // title
    TaskMovedToOngoing(String),   // title
    TaskNotFoundWithId(TaskId),
    TaskAlreadyCompleted(TaskId),
    TaskNotCompleted(TaskId),
    TaskDetailsHeader(TaskId),
    OngoingTasksHeader,
    CompletedTasksHeader,
    NoTasksFound,
    NoChangesDetected,
    ConfirmDeleteTask(String), // title

    // === VALIDATION MESSAGES ===
    TitleRequired,
    InvalidField(String, String), // field, reason
    InvalidDeadline(String),      // input

    // === UNDO MESSAGES ===
    UndoPrompt(u64), // window seconds
    UndoApplied,
    UndoWindowClosed,
    UndoFailed(String),       // error
    AutoCommitFailed(String), // error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleUndo,
    ConfigModuleStorage,

    // === DATABASE MESSAGES ===
    StorageFailed(String), // error

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDeadline,
    PromptSelectModules,
    PromptUndoWindow,
    PromptDbFile,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseVersion(u32), // version
    DatabaseNeedsUpdate,
    MigrationHistory,
}
