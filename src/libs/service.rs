//! Collaborator-facing task operations.
//!
//! [`TaskService`] owns the store and is the only way callers reach it. It
//! validates and normalizes input, partitions tasks into ongoing and
//! completed, and composes color filter, text search and deadline sort.
//!
//! Every operation is a future: the blocking store call runs on Tokio's
//! blocking pool and the caller awaits its result. The service holds no
//! cached copies; each query re-reads the store.
//!
//! ```rust,no_run
//! use clearpath::db::{db::Db, tasks::Tasks};
//! use clearpath::libs::service::TaskService;
//! use clearpath::libs::task::TaskDraft;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let service = TaskService::new(Tasks::from_db(Db::open_in_memory()?));
//! let task = service.add_task(TaskDraft::new("Buy milk")).await?;
//! assert!(!task.is_done);
//! # Ok(())
//! # }
//! ```

use super::error::{Result, TaskError};
use super::store::TaskStore;
use super::task::{normalize_task, Partition, SortOrder, Task, TaskColor, TaskDraft, TaskId, TaskQuery};
use parking_lot::Mutex;
use std::sync::Arc;

/// Parameters of the combined list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub partition: Partition,
    pub color: Option<TaskColor>,
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl TaskView {
    pub fn new(partition: Partition) -> Self {
        TaskView {
            partition,
            color: None,
            search: None,
            sort: SortOrder::None,
        }
    }

    pub fn color(mut self, color: Option<TaskColor>) -> Self {
        self.color = color;
        self
    }

    pub fn search(mut self, search: Option<&str>) -> Self {
        self.search = search.map(str::to_string);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    fn to_query(&self) -> TaskQuery {
        TaskQuery::partition(self.partition)
            .with_color(self.color)
            .with_text(self.search.as_deref())
            .with_order(self.sort)
    }
}

#[derive(Clone)]
pub struct TaskService {
    store: Arc<Mutex<Box<dyn TaskStore>>>,
}

impl TaskService {
    pub fn new<S: TaskStore + 'static>(store: S) -> Self {
        let store: Box<dyn TaskStore> = Box::new(store);
        TaskService {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `op` against the store on the blocking pool.
    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn TaskStore) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || {
            let mut guard = store.lock();
            op(&mut **guard)
        })
        .await?
    }

    // ----- CRUD -----

    /// Validates and normalizes `draft`, then stores it.
    pub async fn add_task(&self, draft: TaskDraft) -> Result<Task> {
        let mut task = draft.normalize()?;
        self.run(move |store| {
            task.id = store.insert(&task)?;
            Ok(task)
        })
        .await
    }

    /// Full-record replace by id, with the same rules as [`add_task`].
    ///
    /// [`add_task`]: TaskService::add_task
    pub async fn update_task(&self, task: Task) -> Result<Task> {
        let task = normalize_task(task)?;
        self.run(move |store| {
            store.update(&task)?;
            Ok(task)
        })
        .await
    }

    /// Hard delete.
    pub async fn delete_task(&self, task: &Task) -> Result<()> {
        let task = task.clone();
        self.run(move |store| store.delete(&task)).await
    }

    pub async fn get_task_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        self.run(move |store| store.get_by_id(id)).await
    }

    /// Like [`get_task_by_id`] but absent is an error.
    ///
    /// [`get_task_by_id`]: TaskService::get_task_by_id
    pub async fn require_task(&self, id: TaskId) -> Result<Task> {
        self.get_task_by_id(id).await?.ok_or(TaskError::NotFound(id))
    }

    // ----- Filters & Queries -----

    pub async fn list(&self, query: TaskQuery) -> Result<Vec<Task>> {
        self.run(move |store| store.list(&query)).await
    }

    pub async fn get_ongoing_tasks(&self) -> Result<Vec<Task>> {
        self.list(TaskQuery::partition(Partition::Ongoing)).await
    }

    pub async fn get_completed_tasks(&self) -> Result<Vec<Task>> {
        self.list(TaskQuery::partition(Partition::Completed)).await
    }

    pub async fn get_ongoing_tasks_by_color(&self, color: TaskColor) -> Result<Vec<Task>> {
        self.list(TaskQuery::partition(Partition::Ongoing).with_color(Some(color))).await
    }

    pub async fn get_completed_tasks_by_color(&self, color: TaskColor) -> Result<Vec<Task>> {
        self.list(TaskQuery::partition(Partition::Completed).with_color(Some(color))).await
    }

    pub async fn search_ongoing(&self, query: &str) -> Result<Vec<Task>> {
        self.list(TaskQuery::partition(Partition::Ongoing).with_text(Some(query))).await
    }

    pub async fn search_completed(&self, query: &str) -> Result<Vec<Task>> {
        self.list(TaskQuery::partition(Partition::Completed).with_text(Some(query))).await
    }

    /// Color filter, then text filter, then deadline sort.
    pub async fn apply_combined_view(&self, view: &TaskView) -> Result<Vec<Task>> {
        self.list(view.to_query()).await
    }
}
