#[cfg(test)]
mod tests {
    use clearpath::db::{db::Db, tasks::Tasks};
    use clearpath::libs::error::TaskError;
    use clearpath::libs::service::{TaskService, TaskView};
    use clearpath::libs::task::{Partition, SortOrder, TaskColor, TaskDraft, TaskQuery, NO_DEADLINE, NO_DESCRIPTION};
    use std::collections::HashSet;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct ServiceTestContext {
        _temp_dir: TempDir,
        service: TaskService,
    }

    impl AsyncTestContext for ServiceTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("service.db")).unwrap();
            ServiceTestContext {
                _temp_dir: temp_dir,
                service: TaskService::new(Tasks::from_db(db)),
            }
        }
    }

    fn titles(tasks: &[clearpath::libs::task::Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_add_fills_sentinels(ctx: &mut ServiceTestContext) {
        let task = ctx.service.add_task(TaskDraft::new("Buy milk").deadline("").description("")).await.unwrap();

        let stored = ctx.service.require_task(task.id).await.unwrap();
        assert_eq!(stored.title, "Buy milk");
        assert_eq!(stored.deadline, NO_DEADLINE);
        assert_eq!(stored.description, NO_DESCRIPTION);
        assert!(!stored.is_done);
        assert_eq!(stored.color, TaskColor::Default);
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_add_trims_title(ctx: &mut ServiceTestContext) {
        let task = ctx.service.add_task(TaskDraft::new("  Call bank  ")).await.unwrap();
        assert_eq!(task.title, "Call bank");
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_empty_title_is_rejected_and_nothing_stored(ctx: &mut ServiceTestContext) {
        for title in ["", "   "] {
            let err = ctx.service.add_task(TaskDraft::new(title)).await.unwrap_err();
            assert!(matches!(err, TaskError::Validation { field: "title", .. }));
        }
        assert!(ctx.service.list(TaskQuery::all()).await.unwrap().is_empty());
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_update_applies_same_rules(ctx: &mut ServiceTestContext) {
        let mut task = ctx.service.add_task(TaskDraft::new("Plan trip").deadline("2024/6/1")).await.unwrap();

        task.deadline = String::new();
        task.color = TaskColor::Orange;
        let updated = ctx.service.update_task(task.clone()).await.unwrap();
        assert_eq!(updated.deadline, NO_DEADLINE);
        assert_eq!(ctx.service.require_task(task.id).await.unwrap(), updated);

        task.title = " ".to_string();
        assert!(ctx.service.update_task(task).await.unwrap_err().is_validation());
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_missing_task_is_not_found(ctx: &mut ServiceTestContext) {
        assert_eq!(ctx.service.get_task_by_id(404).await.unwrap(), None);
        assert_eq!(ctx.service.require_task(404).await, Err(TaskError::NotFound(404)));

        let mut ghost = TaskDraft::new("Ghost").normalize().unwrap();
        ghost.id = 404;
        assert!(ctx.service.update_task(ghost.clone()).await.unwrap_err().is_not_found());
        assert!(ctx.service.delete_task(&ghost).await.unwrap_err().is_not_found());
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_partitions_are_disjoint_and_complete(ctx: &mut ServiceTestContext) {
        for (title, done) in [("One", false), ("Two", true), ("Three", false), ("Four", true), ("Five", true)] {
            ctx.service.add_task(TaskDraft::new(title).done(done)).await.unwrap();
        }

        let ongoing: HashSet<_> = ctx.service.get_ongoing_tasks().await.unwrap().iter().map(|t| t.id).collect();
        let completed: HashSet<_> = ctx.service.get_completed_tasks().await.unwrap().iter().map(|t| t.id).collect();
        let all: HashSet<_> = ctx.service.list(TaskQuery::all()).await.unwrap().iter().map(|t| t.id).collect();

        assert!(ongoing.is_disjoint(&completed));
        assert_eq!(ongoing.union(&completed).copied().collect::<HashSet<_>>(), all);
        assert_eq!(ongoing.len(), 2);
        assert_eq!(completed.len(), 3);
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_color_filter_per_partition(ctx: &mut ServiceTestContext) {
        ctx.service.add_task(TaskDraft::new("Blue ongoing").color(TaskColor::Blue)).await.unwrap();
        ctx.service.add_task(TaskDraft::new("Blue done").color(TaskColor::Blue).done(true)).await.unwrap();
        ctx.service.add_task(TaskDraft::new("Yellow ongoing").color(TaskColor::Yellow)).await.unwrap();

        assert_eq!(titles(&ctx.service.get_ongoing_tasks_by_color(TaskColor::Blue).await.unwrap()), vec!["Blue ongoing"]);
        assert_eq!(titles(&ctx.service.get_completed_tasks_by_color(TaskColor::Blue).await.unwrap()), vec!["Blue done"]);
        assert!(ctx.service.get_completed_tasks_by_color(TaskColor::Yellow).await.unwrap().is_empty());
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_search_covers_title_description_and_deadline(ctx: &mut ServiceTestContext) {
        ctx.service.add_task(TaskDraft::new("Dentist")).await.unwrap();
        ctx.service.add_task(TaskDraft::new("Errand").description("Pick up from DENTIST")).await.unwrap();
        ctx.service.add_task(TaskDraft::new("Report").deadline("2024/1/5")).await.unwrap();
        ctx.service.add_task(TaskDraft::new("Dentist bill").done(true)).await.unwrap();

        assert_eq!(titles(&ctx.service.search_ongoing("dentist").await.unwrap()), vec!["Errand", "Dentist"]);
        assert_eq!(titles(&ctx.service.search_ongoing("2024/1").await.unwrap()), vec!["Report"]);
        assert_eq!(titles(&ctx.service.search_completed("DENT").await.unwrap()), vec!["Dentist bill"]);
        assert_eq!(ctx.service.search_ongoing("  ").await.unwrap().len(), 3);
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_search_matches_non_ascii_case_insensitively(ctx: &mut ServiceTestContext) {
        ctx.service.add_task(TaskDraft::new("Купить ХЛЕБ")).await.unwrap();
        assert_eq!(ctx.service.search_ongoing("хлеб").await.unwrap().len(), 1);
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_sort_keeps_missing_deadlines_last(ctx: &mut ServiceTestContext) {
        ctx.service.add_task(TaskDraft::new("Dated").deadline("2024/1/5")).await.unwrap();
        ctx.service.add_task(TaskDraft::new("Undated").deadline("")).await.unwrap();

        let ascending = ctx.service.apply_combined_view(&TaskView::new(Partition::Ongoing).sort(SortOrder::Ascending)).await.unwrap();
        let descending = ctx.service.apply_combined_view(&TaskView::new(Partition::Ongoing).sort(SortOrder::Descending)).await.unwrap();

        assert_eq!(titles(&ascending), vec!["Dated", "Undated"]);
        assert_eq!(titles(&descending), vec!["Dated", "Undated"]);
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_sort_directions_mirror_for_distinct_deadlines(ctx: &mut ServiceTestContext) {
        for (title, deadline) in [("B", "2024/2/1"), ("A", "2024/1/1"), ("C", "2024/3/1"), ("None", "")] {
            ctx.service.add_task(TaskDraft::new(title).deadline(deadline)).await.unwrap();
        }

        let ascending = ctx.service.apply_combined_view(&TaskView::new(Partition::Ongoing).sort(SortOrder::Ascending)).await.unwrap();
        let descending = ctx.service.apply_combined_view(&TaskView::new(Partition::Ongoing).sort(SortOrder::Descending)).await.unwrap();

        assert_eq!(titles(&ascending), vec!["A", "B", "C", "None"]);
        assert_eq!(titles(&descending), vec!["C", "B", "A", "None"]);
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_combined_view_applies_every_filter(ctx: &mut ServiceTestContext) {
        ctx.service.add_task(TaskDraft::new("Pay rent").color(TaskColor::Pink).deadline("2024/3/1")).await.unwrap();
        ctx.service.add_task(TaskDraft::new("Pay taxes").color(TaskColor::Pink).deadline("2024/1/5")).await.unwrap();
        ctx.service.add_task(TaskDraft::new("Walk dog").color(TaskColor::Pink)).await.unwrap();
        ctx.service.add_task(TaskDraft::new("Pay phone").color(TaskColor::Blue).deadline("2024/1/1")).await.unwrap();
        ctx.service.add_task(TaskDraft::new("Pay gym").color(TaskColor::Pink).done(true)).await.unwrap();

        let view = TaskView::new(Partition::Ongoing).color(Some(TaskColor::Pink)).search(Some("pay")).sort(SortOrder::Descending);
        let tasks = ctx.service.apply_combined_view(&view).await.unwrap();

        assert_eq!(titles(&tasks), vec!["Pay rent", "Pay taxes"]);
    }

    #[test_context(ServiceTestContext)]
    #[tokio::test]
    async fn test_queries_see_latest_writes(ctx: &mut ServiceTestContext) {
        let mut task = ctx.service.add_task(TaskDraft::new("Fresh")).await.unwrap();
        assert_eq!(ctx.service.get_ongoing_tasks().await.unwrap().len(), 1);

        task.is_done = true;
        ctx.service.update_task(task.clone()).await.unwrap();
        assert!(ctx.service.get_ongoing_tasks().await.unwrap().is_empty());
        assert_eq!(ctx.service.get_completed_tasks().await.unwrap().len(), 1);

        ctx.service.delete_task(&task).await.unwrap();
        assert!(ctx.service.list(TaskQuery::all()).await.unwrap().is_empty());
    }
}
