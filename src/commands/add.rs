use super::{open_service, report};
use crate::{
    libs::{
        deadline,
        messages::Message,
        task::{TaskColor, TaskDraft},
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; prompted for when omitted
    title: Option<String>,
    /// Free-form description
    #[arg(short, long)]
    description: Option<String>,
    /// Deadline: YYYY-MM-DD, today or tomorrow
    #[arg(long)]
    deadline: Option<String>,
    /// Color tag
    #[arg(short, long, value_enum, default_value_t = TaskColor::Default)]
    color: TaskColor,
    /// Reference to an attached image
    #[arg(short, long)]
    image: Option<String>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let interactive = args.title.is_none();
    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let description = match args.description {
        Some(description) => description,
        None if interactive => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };
    let deadline_input = match args.deadline {
        Some(deadline) => deadline,
        None if interactive => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDeadline.to_string())
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };

    let deadline = match deadline::parse(&deadline_input) {
        Ok(deadline) => deadline,
        Err(_) => {
            msg_error!(Message::InvalidDeadline(deadline_input));
            return Ok(());
        }
    };

    let mut draft = TaskDraft::new(&title).description(&description).deadline(&deadline).color(args.color);
    if let Some(image) = args.image.as_deref() {
        draft = draft.image_uri(image);
    }

    match open_service()?.add_task(draft).await {
        Ok(task) => msg_success!(Message::TaskCreated(task.id)),
        Err(e) => return report(e),
    }

    Ok(())
}
