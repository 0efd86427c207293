//! Task data model and the pure parts of the query engine.
//!
//! A [`Task`] is always a snapshot: the store owns the persisted record and
//! every query hands back fresh owned copies. New tasks start life as a
//! [`TaskDraft`] which the service validates and normalizes before insertion.

use super::error::{Result, TaskError};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub type TaskId = i64;

/// Stored in place of an empty description.
pub const NO_DESCRIPTION: &str = "No description";
/// Stored in place of an empty deadline. Always sorts last.
pub const NO_DEADLINE: &str = "No deadline";

/// Color tag from the fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskColor {
    #[default]
    Default,
    Blue,
    Yellow,
    Pink,
    Orange,
}

impl TaskColor {
    pub const ALL: [TaskColor; 5] = [TaskColor::Default, TaskColor::Blue, TaskColor::Yellow, TaskColor::Pink, TaskColor::Orange];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskColor::Default => "default",
            TaskColor::Blue => "blue",
            TaskColor::Yellow => "yellow",
            TaskColor::Pink => "pink",
            TaskColor::Orange => "orange",
        }
    }
}

impl fmt::Display for TaskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskColor {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        TaskColor::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TaskError::validation("color", format!("unknown color '{}'", s)))
    }
}

impl ToSql for TaskColor {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TaskColor {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: TaskError| FromSqlError::Other(Box::new(e)))
    }
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub is_done: bool,
    pub color: TaskColor,
    pub image_uri: Option<String>,
}

impl Task {
    /// Whether the deadline is a real token rather than empty or the sentinel.
    pub fn has_deadline(&self) -> bool {
        let deadline = self.deadline.trim();
        !deadline.is_empty() && deadline != NO_DEADLINE
    }

    /// Case-insensitive substring match over title, description and deadline.
    /// A blank needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.title, &self.description, &self.deadline].iter().any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn partition(&self) -> Partition {
        if self.is_done {
            Partition::Completed
        } else {
            Partition::Ongoing
        }
    }

    /// Field values without the id, for re-insertion.
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            deadline: self.deadline.clone(),
            is_done: self.is_done,
            color: Some(self.color),
            image_uri: self.image_uri.clone(),
        }
    }

    /// Same field values, ignoring the store-assigned id.
    pub fn same_content(&self, other: &Task) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.deadline == other.deadline
            && self.color == other.color
            && self.image_uri == other.image_uri
    }
}

/// Input for a task that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub is_done: bool,
    pub color: Option<TaskColor>,
    pub image_uri: Option<String>,
}

impl TaskDraft {
    pub fn new(title: &str) -> Self {
        TaskDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn deadline(mut self, deadline: &str) -> Self {
        self.deadline = deadline.to_string();
        self
    }

    pub fn color(mut self, color: TaskColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn image_uri(mut self, image_uri: &str) -> Self {
        self.image_uri = Some(image_uri.to_string());
        self
    }

    pub fn done(mut self, is_done: bool) -> Self {
        self.is_done = is_done;
        self
    }

    /// Applies the domain rules and produces a storable task with a
    /// placeholder id.
    pub fn normalize(self) -> Result<Task> {
        let title = normalize_title(&self.title)?;
        Ok(Task {
            id: 0,
            title,
            description: or_sentinel(self.description, NO_DESCRIPTION),
            deadline: or_sentinel(self.deadline.trim().to_string(), NO_DEADLINE),
            is_done: self.is_done,
            color: self.color.unwrap_or_default(),
            image_uri: self.image_uri,
        })
    }
}

/// Same rules as [`TaskDraft::normalize`], applied to an existing record.
pub fn normalize_task(task: Task) -> Result<Task> {
    Ok(Task {
        title: normalize_title(&task.title)?,
        description: or_sentinel(task.description, NO_DESCRIPTION),
        deadline: or_sentinel(task.deadline.trim().to_string(), NO_DEADLINE),
        ..task
    })
}

fn normalize_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::validation("title", "a title is required"));
    }
    Ok(title.to_string())
}

fn or_sentinel(value: String, sentinel: &str) -> String {
    if value.is_empty() {
        sentinel.to_string()
    } else {
        value
    }
}

/// The two disjoint lists every task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Partition {
    Ongoing,
    Completed,
}

impl Partition {
    pub fn is_done(&self) -> bool {
        matches!(self, Partition::Completed)
    }
}

/// Deadline ordering. `None` keeps the default newest-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum SortOrder {
    #[default]
    #[value(name = "none")]
    None,
    #[value(name = "asc")]
    Ascending,
    #[value(name = "desc")]
    Descending,
}

impl SortOrder {
    /// Compares two tasks by deadline. Missing deadlines are greater than any
    /// real deadline in both directions.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match (a.has_deadline(), b.has_deadline()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
            (true, true) => match self {
                SortOrder::None => Ordering::Equal,
                SortOrder::Ascending => a.deadline.trim().cmp(b.deadline.trim()),
                SortOrder::Descending => b.deadline.trim().cmp(a.deadline.trim()),
            },
        }
    }

    /// Stable sort; input is expected in id-descending order so ties keep
    /// newest-first.
    pub fn sort(&self, tasks: &mut [Task]) {
        if *self == SortOrder::None {
            return;
        }
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}

/// Conjunctive predicate plus ordering for [`TaskStore::list`].
///
/// [`TaskStore::list`]: super::store::TaskStore::list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub is_done: Option<bool>,
    pub color: Option<TaskColor>,
    pub text: Option<String>,
    pub order: SortOrder,
}

impl TaskQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn partition(partition: Partition) -> Self {
        TaskQuery {
            is_done: Some(partition.is_done()),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Option<TaskColor>) -> Self {
        self.color = color;
        self
    }

    /// Blank text is treated as no filter.
    pub fn with_text(mut self, text: Option<&str>) -> Self {
        self.text = text.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string);
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Predicates that are not pushed down into storage.
    pub fn accepts(&self, task: &Task) -> bool {
        self.is_done.map_or(true, |done| task.is_done == done)
            && self.color.map_or(true, |color| task.color == color)
            && self.text.as_deref().map_or(true, |text| task.matches(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: TaskId, deadline: &str) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: NO_DESCRIPTION.to_string(),
            deadline: deadline.to_string(),
            is_done: false,
            color: TaskColor::Default,
            image_uri: None,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_draft_normalization_fills_sentinels() {
        let task = TaskDraft::new("  Buy milk ").normalize().unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, NO_DESCRIPTION);
        assert_eq!(task.deadline, NO_DEADLINE);
        assert_eq!(task.color, TaskColor::Default);
        assert!(!task.is_done);
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let err = TaskDraft::new("   ").normalize().unwrap_err();
        assert!(matches!(err, TaskError::Validation { field: "title", .. }));
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("Blue".parse::<TaskColor>().unwrap(), TaskColor::Blue);
        assert_eq!(" orange ".parse::<TaskColor>().unwrap(), TaskColor::Orange);
        assert!("green".parse::<TaskColor>().is_err());
    }

    #[test]
    fn test_missing_deadlines_sort_last_both_ways() {
        let base = vec![task(4, ""), task(3, "2024/1/5"), task(2, NO_DEADLINE), task(1, "2023/12/31")];

        let mut asc = base.clone();
        SortOrder::Ascending.sort(&mut asc);
        assert_eq!(ids(&asc), vec![1, 3, 4, 2]);

        let mut desc = base.clone();
        SortOrder::Descending.sort(&mut desc);
        assert_eq!(ids(&desc), vec![3, 1, 4, 2]);

        let mut none = base.clone();
        SortOrder::None.sort(&mut none);
        assert_eq!(ids(&none), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_equal_deadlines_keep_newest_first() {
        let mut tasks = vec![task(9, "2024/2/1"), task(7, "2024/2/1"), task(5, "2024/1/1")];
        SortOrder::Descending.sort(&mut tasks);
        assert_eq!(ids(&tasks), vec![9, 7, 5]);
        SortOrder::Ascending.sort(&mut tasks);
        assert_eq!(ids(&tasks), vec![5, 9, 7]);
    }

    #[test]
    fn test_surrounding_whitespace_does_not_change_deadline_order() {
        let mut tasks = vec![task(3, "2024/1/5"), task(2, " 2024/1/5"), task(1, " 2024/2/1 ")];
        SortOrder::Ascending.sort(&mut tasks);
        assert_eq!(ids(&tasks), vec![3, 2, 1]);
        SortOrder::Descending.sort(&mut tasks);
        assert_eq!(ids(&tasks), vec![1, 3, 2]);
    }

    #[test]
    fn test_normalization_trims_deadline() {
        let task = TaskDraft::new("Pay rent").deadline("  2024/3/1 ").normalize().unwrap();
        assert_eq!(task.deadline, "2024/3/1");

        let blank = TaskDraft::new("Pay rent").deadline("   ").normalize().unwrap();
        assert_eq!(blank.deadline, NO_DEADLINE);
    }

    #[test]
    fn test_matches_is_case_insensitive_and_unicode_aware() {
        let mut t = task(1, "2024/3/1");
        t.title = "Купить Молоко".to_string();
        assert!(t.matches("молоко"));
        assert!(t.matches("2024/3"));
        assert!(t.matches("  "));
        assert!(!t.matches("bread"));
    }

    #[test]
    fn test_query_blank_text_is_no_filter() {
        let query = TaskQuery::all().with_text(Some("   "));
        assert_eq!(query.text, None);
    }
}
