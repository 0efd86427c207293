pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod migrations;
pub mod restore;
pub mod show;
pub mod undo;

use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{
        config::Config,
        error::TaskError,
        messages::from_task_error,
        service::TaskService,
        transition::TransitionCoordinator,
    },
    msg_error, msg_error_anyhow,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create task")]
    Add(add::AddArgs),
    #[command(about = "Edit task fields", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Show task details", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "List ongoing or completed tasks")]
    List(list::ListArgs),
    #[command(about = "Mark task as completed", arg_required_else_help = true)]
    Complete(complete::CompleteArgs),
    #[command(about = "Move completed task back to ongoing", arg_required_else_help = true)]
    Restore(restore::RestoreArgs),
    #[command(about = "Delete task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Database schema version and history", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Show(args) => show::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Complete(args) => complete::cmd(args).await,
            Commands::Restore(args) => restore::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Service over the configured database.
pub(crate) fn open_service() -> Result<TaskService> {
    Ok(TaskService::new(Tasks::new()?))
}

/// Coordinator over the configured database with the configured undo window.
pub(crate) fn open_coordinator() -> Result<TransitionCoordinator> {
    let config = Config::read()?;
    let tasks = Tasks::from_db(Db::open(Db::resolve_path(&config)?)?);
    Ok(TransitionCoordinator::new(TaskService::new(tasks), config.undo_window()))
}

/// Prints user errors and lets the command finish; storage errors abort.
pub(crate) fn report(err: TaskError) -> Result<()> {
    let message = from_task_error(&err);
    if let TaskError::Storage(_) = err {
        return Err(msg_error_anyhow!(message));
    }
    msg_error!(message);
    Ok(())
}
