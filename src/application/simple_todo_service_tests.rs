#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::super::simple_todo_service::{SimpleTodoService, SimpleTodoServiceImpl};
    use crate::domain::clock::SteppingClock;
    use crate::domain::error::TodoError;
    use crate::domain::simple_todo::{SimpleTodo, SimpleTodoId, SimpleTodoInput};
    use crate::infrastructure::memory_repo::MemoryRepository;

    fn service() -> SimpleTodoServiceImpl<MemoryRepository<SimpleTodo>> {
        SimpleTodoServiceImpl::with_clock(MemoryRepository::new(), Arc::new(SteppingClock::new(Utc::now(), 10)))
    }

    fn text(t: &str) -> SimpleTodoInput {
        SimpleTodoInput { text: Some(t.into()) }
    }

    #[tokio::test]
    async fn duplicate_text_is_a_conflict_and_does_not_grow_the_list() {
        let service = service();
        service.create(text("x")).await.unwrap();
        let err = service.create(text("x")).await.unwrap_err();
        assert!(matches!(err, TodoError::Conflict(_)));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_deleting_the_newest() {
        let service = service();
        let a = service.create(text("a")).await.unwrap();
        let b = service.create(text("b")).await.unwrap();
        assert_eq!((a.id, b.id), (SimpleTodoId(0), SimpleTodoId(1)));
        service.delete(&b.id).await.unwrap();
        let c = service.create(text("c")).await.unwrap();
        assert_eq!(c.id, SimpleTodoId(2));
    }

    #[tokio::test]
    async fn rejected_create_does_not_consume_an_id() {
        let service = service();
        service.create(text("a")).await.unwrap();
        service.create(text("a")).await.unwrap_err();
        let b = service.create(text("b")).await.unwrap();
        assert_eq!(b.id, SimpleTodoId(1));
    }

    #[tokio::test]
    async fn update_allows_duplicate_text() {
        let service = service();
        service.create(text("a")).await.unwrap();
        let b = service.create(text("b")).await.unwrap();
        let updated = service.update(&b.id, text("a")).await.unwrap();
        assert_eq!(updated.text, "a");
        assert!(updated.date > b.date);
    }

    #[tokio::test]
    async fn update_requires_text_even_for_unknown_ids() {
        let service = service();
        let err = service.update(&SimpleTodoId(5), SimpleTodoInput::default()).await.unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
        let err = service.update(&SimpleTodoId(5), text("y")).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
    }

    #[tokio::test]
    async fn delete_returns_the_removed_todo() {
        let service = service();
        let a = service.create(text("a")).await.unwrap();
        assert_eq!(service.delete(&a.id).await.unwrap(), a);
        assert!(matches!(service.delete(&a.id).await, Err(TodoError::NotFound)));
    }
}
