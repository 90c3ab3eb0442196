use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::store::{StorageBackend, TodoStore};

pub fn run<B: StorageBackend>(store: &mut TodoStore<B>, content: &str) -> Result<CmdResult> {
    let id = store.add(content)?;
    let todo = store
        .find_by_id(id)
        .ok_or_else(|| TodoError::Store(format!("Todo {} vanished after add", id)))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Todo added ({}): {}",
        todo.id, todo.content
    )));
    Ok(result.with_affected_todos(vec![todo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn creates_todo_at_head() {
        let mut store = StoreFixture::seeded().store;
        let result = run(&mut store, "  Walk the dog ").unwrap();

        assert_eq!(result.affected_todos.len(), 1);
        assert_eq!(result.affected_todos[0].id, 4);
        assert_eq!(result.affected_todos[0].content, "Walk the dog");
        assert_eq!(store.list()[0].id, 4);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Todo added (4): Walk the dog");
    }

    #[test]
    fn blank_content_is_rejected() {
        let mut store = StoreFixture::seeded().store;
        let err = run(&mut store, "   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len(), 3);
    }
}
