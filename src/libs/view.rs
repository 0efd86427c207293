use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        Self::tasks_table(tasks).printstd();

        Ok(())
    }

    pub fn task_details(task: &Task) -> Result<()> {
        Self::details_table(task).printstd();

        Ok(())
    }

    fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DEADLINE", "COLOR", "DONE", "IMAGE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.description,
                task.deadline,
                task.color,
                Self::done_mark(task.is_done),
                task.image_uri.as_deref().unwrap_or("-")
            ]);
        }

        table
    }

    fn details_table(task: &Task) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description]);
        table.add_row(row!["DEADLINE", task.deadline]);
        table.add_row(row!["COLOR", task.color]);
        table.add_row(row!["DONE", Self::done_mark(task.is_done)]);
        table.add_row(row!["IMAGE", task.image_uri.as_deref().unwrap_or("-")]);

        table
    }

    fn done_mark(is_done: bool) -> &'static str {
        if is_done {
            "✓"
        } else {
            ""
        }
    }
}
