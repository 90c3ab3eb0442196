use crate::commands::{CmdMessage, CmdResult, TodoUpdate};
use crate::error::Result;
use crate::model::normalize_content;
use crate::store::{StorageBackend, TodoStore};

pub fn run<B: StorageBackend>(
    store: &mut TodoStore<B>,
    updates: &[TodoUpdate],
) -> Result<CmdResult> {
    if updates.is_empty() {
        return Ok(CmdResult::default());
    }

    // Reject the whole batch before touching anything if one entry is blank
    for update in updates {
        normalize_content(&update.content)?;
    }

    let mut result = CmdResult::default();
    for update in updates {
        match store.update_by_id(update.id, &update.content)? {
            Some(todo) => {
                result.add_message(CmdMessage::success(format!(
                    "Todo updated ({}): {}",
                    todo.id, todo.content
                )));
                result.affected_todos.push(todo);
            }
            None => result.add_missing(update.id),
        }
    }

    Ok(result)
}
