use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::TodoId;
use crate::store::{StorageBackend, TodoStore};

use super::helpers::todos_by_ids;

pub fn run<B: StorageBackend>(store: &TodoStore<B>, ids: &[TodoId]) -> Result<CmdResult> {
    let (found, missing) = todos_by_ids(store, ids);
    let mut result = CmdResult::default().with_listed_todos(found);
    for id in missing {
        result.add_missing(id);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_added_todo() {
        let mut store = StoreFixture::new().store;
        create::run(&mut store, "study").unwrap();

        let result = run(&store, &[1]).unwrap();
        assert_eq!(result.listed_todos[0].content, "study");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn missing_ids_are_warnings_not_errors() {
        let store = StoreFixture::seeded().store;
        let result = run(&store, &[2, 40]).unwrap();
        assert_eq!(result.listed_todos.len(), 1);
        assert_eq!(result.missing_ids, vec![40]);
        assert_eq!(result.messages[0].content, "Todo 40 not found");
    }
}
