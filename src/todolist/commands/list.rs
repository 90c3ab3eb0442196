use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{StorageBackend, TodoStore};

/// All todos in store order, optionally narrowed by a case-insensitive substring.
pub fn run<B: StorageBackend>(store: &TodoStore<B>, search: Option<&str>) -> Result<CmdResult> {
    let needle = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let listed = match needle {
        Some(needle) => store
            .list()
            .iter()
            .filter(|t| t.content.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
        None => store.list().to_vec(),
    };

    Ok(CmdResult::default().with_listed_todos(listed))
}
