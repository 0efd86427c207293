#[cfg(test)]
mod tests {
    use clearpath::db::{db::Db, tasks::Tasks};
    use clearpath::libs::error::TaskError;
    use clearpath::libs::store::TaskStore;
    use clearpath::libs::task::{Partition, SortOrder, TaskColor, TaskDraft, TaskQuery, NO_DEADLINE};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TasksTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TasksTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            TasksTestContext { temp_dir }
        }
    }

    impl TasksTestContext {
        fn tasks(&self) -> Tasks {
            Tasks::from_db(Db::open(self.temp_dir.path().join("tasks.db")).unwrap())
        }
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_insert_and_get_by_id(ctx: &mut TasksTestContext) {
        let mut tasks = ctx.tasks();
        let task = TaskDraft::new("Write report").description("Quarterly").color(TaskColor::Blue).normalize().unwrap();

        let id = tasks.insert(&task).unwrap();
        let stored = tasks.get_by_id(id).unwrap().unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.title, "Write report");
        assert_eq!(stored.description, "Quarterly");
        assert_eq!(stored.deadline, NO_DEADLINE);
        assert_eq!(stored.color, TaskColor::Blue);
        assert!(!stored.is_done);
        assert_eq!(stored.image_uri, None);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_get_missing_id_is_none(ctx: &mut TasksTestContext) {
        let tasks = ctx.tasks();
        assert_eq!(tasks.get_by_id(42).unwrap(), None);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_update_replaces_full_record(ctx: &mut TasksTestContext) {
        let mut tasks = ctx.tasks();
        let id = tasks.insert(&TaskDraft::new("Draft").normalize().unwrap()).unwrap();

        let mut task = tasks.get_by_id(id).unwrap().unwrap();
        task.title = "Final".to_string();
        task.is_done = true;
        task.image_uri = Some("file:///tmp/cover.png".to_string());
        tasks.update(&task).unwrap();

        assert_eq!(tasks.get_by_id(id).unwrap().unwrap(), task);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_update_and_delete_missing_record_are_not_found(ctx: &mut TasksTestContext) {
        let mut tasks = ctx.tasks();
        let mut ghost = TaskDraft::new("Ghost").normalize().unwrap();
        ghost.id = 99;

        assert_eq!(tasks.update(&ghost), Err(TaskError::NotFound(99)));
        assert_eq!(tasks.delete(&ghost), Err(TaskError::NotFound(99)));
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_deleted_ids_are_not_reused(ctx: &mut TasksTestContext) {
        let mut tasks = ctx.tasks();
        let first = tasks.insert(&TaskDraft::new("First").normalize().unwrap()).unwrap();
        let task = tasks.get_by_id(first).unwrap().unwrap();
        tasks.delete(&task).unwrap();

        let second = tasks.insert(&TaskDraft::new("Second").normalize().unwrap()).unwrap();
        assert!(second > first);
        assert_eq!(tasks.get_by_id(first).unwrap(), None);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_list_is_newest_first_and_filters_partition(ctx: &mut TasksTestContext) {
        let mut tasks = ctx.tasks();
        let a = tasks.insert(&TaskDraft::new("A").normalize().unwrap()).unwrap();
        let b = tasks.insert(&TaskDraft::new("B").done(true).normalize().unwrap()).unwrap();
        let c = tasks.insert(&TaskDraft::new("C").normalize().unwrap()).unwrap();

        let all: Vec<_> = tasks.list(&TaskQuery::all()).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(all, vec![c, b, a]);

        let ongoing: Vec<_> = tasks.list(&TaskQuery::partition(Partition::Ongoing)).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ongoing, vec![c, a]);

        let completed: Vec<_> = tasks.list(&TaskQuery::partition(Partition::Completed)).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![b]);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_list_combines_color_text_and_order(ctx: &mut TasksTestContext) {
        let mut tasks = ctx.tasks();
        tasks.insert(&TaskDraft::new("Pay rent").deadline("2024/3/1").color(TaskColor::Pink).normalize().unwrap()).unwrap();
        tasks.insert(&TaskDraft::new("Pay taxes").deadline("2024/1/5").color(TaskColor::Pink).normalize().unwrap()).unwrap();
        tasks.insert(&TaskDraft::new("PAY bills").color(TaskColor::Pink).normalize().unwrap()).unwrap();
        tasks.insert(&TaskDraft::new("Pay phone").deadline("2024/1/1").color(TaskColor::Blue).normalize().unwrap()).unwrap();

        let query = TaskQuery::partition(Partition::Ongoing)
            .with_color(Some(TaskColor::Pink))
            .with_text(Some("pay"))
            .with_order(SortOrder::Ascending);
        let titles: Vec<_> = tasks.list(&query).unwrap().into_iter().map(|t| t.title).collect();

        assert_eq!(titles, vec!["Pay taxes", "Pay rent", "PAY bills"]);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_records_survive_reopen(ctx: &mut TasksTestContext) {
        let id = {
            let mut tasks = ctx.tasks();
            tasks.insert(&TaskDraft::new("Persist me").normalize().unwrap()).unwrap()
        };

        let tasks = ctx.tasks();
        assert_eq!(tasks.get_by_id(id).unwrap().unwrap().title, "Persist me");
    }
}
