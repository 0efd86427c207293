use super::{open_service, report};
use crate::{
    libs::{
        deadline,
        messages::Message,
        task::{normalize_task, TaskColor, TaskId},
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    id: TaskId,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Deadline: YYYY-MM-DD, today, tomorrow or empty to clear
    #[arg(long)]
    deadline: Option<String>,
    #[arg(long, value_enum)]
    color: Option<TaskColor>,
    #[arg(long, conflicts_with = "clear_image")]
    image: Option<String>,
    /// Remove the attached image reference
    #[arg(long)]
    clear_image: bool,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.deadline.is_some() || self.color.is_some() || self.image.is_some() || self.clear_image
    }
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let service = open_service()?;
    let current = match service.require_task(args.id).await {
        Ok(task) => task,
        Err(e) => return report(e),
    };

    let mut task = current.clone();
    if args.has_changes() {
        if let Some(title) = args.title {
            task.title = title;
        }
        if let Some(description) = args.description {
            task.description = description;
        }
        if let Some(input) = args.deadline {
            match deadline::parse(&input) {
                Ok(deadline) => task.deadline = deadline,
                Err(_) => {
                    msg_error!(Message::InvalidDeadline(input));
                    return Ok(());
                }
            }
        }
        if let Some(color) = args.color {
            task.color = color;
        }
        if let Some(image) = args.image {
            task.image_uri = Some(image);
        }
        if args.clear_image {
            task.image_uri = None;
        }
    } else {
        msg_print!(Message::TaskDetailsHeader(current.id), true);
        task.title = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .default(current.title.clone())
            .allow_empty(true)
            .interact_text()?;
        task.description = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .default(current.description.clone())
            .allow_empty(true)
            .interact_text()?;

        let deadline_default = if current.has_deadline() { current.deadline.clone() } else { String::new() };
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDeadline.to_string())
            .default(deadline_default)
            .allow_empty(true)
            .interact_text()?;
        task.deadline = match deadline::parse(&input) {
            Ok(deadline) => deadline,
            Err(_) => {
                msg_error!(Message::InvalidDeadline(input));
                return Ok(());
            }
        };

        let colors: Vec<&str> = TaskColor::ALL.iter().map(|c| c.as_str()).collect();
        let selected = Select::with_theme(&ColorfulTheme::default())
            .items(&colors)
            .default(TaskColor::ALL.iter().position(|c| *c == current.color).unwrap_or(0))
            .interact()?;
        task.color = TaskColor::ALL[selected];
    }

    if matches!(normalize_task(task.clone()), Ok(ref normalized) if *normalized == current) {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match service.update_task(task).await {
        Ok(task) => msg_success!(Message::TaskUpdated(task.id)),
        Err(e) => return report(e),
    }

    Ok(())
}
