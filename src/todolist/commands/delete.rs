use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoId;
use crate::store::{StorageBackend, TodoStore};

pub fn run<B: StorageBackend>(store: &mut TodoStore<B>, ids: &[TodoId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        match store.remove_by_id(*id)? {
            Some(todo) => {
                result.add_message(CmdMessage::success(format!(
                    "Todo deleted ({}): {}",
                    todo.id, todo.content
                )));
                result.affected_todos.push(todo);
            }
            None => result.add_missing(*id),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_todos() {
        let mut store = StoreFixture::seeded().store;
        let result = run(&mut store, &[3, 1]).unwrap();
        assert_eq!(result.affected_todos.len(), 2);

        let remaining = list::run(&store, None).unwrap().listed_todos;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn missing_and_repeated_ids_warn() {
        let mut store = StoreFixture::seeded().store;
        let result = run(&mut store, &[2, 2, 77]).unwrap();
        assert_eq!(result.affected_todos.len(), 1);
        assert_eq!(result.missing_ids, vec![2, 77]);
        assert_eq!(store.len(), 2);
    }
}
