//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every todolist operation, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (user-typed ids such as `"3"` or `"#3"` become [`TodoId`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O and no formatting.
//!
//! ## Generic Over StorageBackend
//!
//! `TodoApi<B: StorageBackend>` owns one [`TodoStore`]:
//! - Production: `TodoApi<FsBackend>`
//! - Testing and `--no-persist`: `TodoApi<MemBackend>`
//!
//! [`TodoId`]: crate::model::TodoId

use crate::commands;
use crate::commands::helpers::{parse_id, parse_ids};
use crate::error::Result;
use crate::store::{StorageBackend, TodoStore};

/// The main API facade for todolist operations.
pub struct TodoApi<B: StorageBackend> {
    store: TodoStore<B>,
    paths: commands::TodoPaths,
}

impl<B: StorageBackend> TodoApi<B> {
    pub fn new(store: TodoStore<B>, paths: commands::TodoPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_todo(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, content)
    }

    pub fn list_todos(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, search)
    }

    pub fn view_todos<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::view::run(&self.store, &ids)
    }

    pub fn update_todo(&mut self, id: &str, content: &str) -> Result<commands::CmdResult> {
        let update = commands::TodoUpdate::new(parse_id(id)?, content);
        commands::update::run(&mut self.store, &[update])
    }

    pub fn update_todos(&mut self, updates: &[commands::TodoUpdate]) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, updates)
    }

    pub fn delete_todos<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn data_paths(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.paths, &self.store)
    }

    pub fn paths(&self) -> &commands::TodoPaths {
        &self.paths
    }

    pub fn store(&self) -> &TodoStore<B> {
        &self.store
    }

    /// Direct access, e.g. to register change listeners.
    pub fn store_mut(&mut self) -> &mut TodoStore<B> {
        &mut self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, TodoPaths, TodoUpdate};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::store::mem_backend::MemBackend;
    use crate::store::memory::fixtures::StoreFixture;
    use std::path::PathBuf;

    fn api() -> TodoApi<MemBackend> {
        TodoApi::new(
            StoreFixture::seeded().store,
            TodoPaths::new(PathBuf::from("/tmp/todolist-test")),
        )
    }

    #[test]
    fn add_dispatches_to_create() {
        let mut api = api();
        let result = api.add_todo("Read").unwrap();
        assert_eq!(result.affected_todos[0].id, 4);
        assert_eq!(api.store().len(), 4);
    }

    #[test]
    fn view_parses_ids() {
        let api = api();
        let result = api.view_todos(&["#1", "3"]).unwrap();
        let ids: Vec<_> = result.listed_todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn invalid_id_is_api_error() {
        let mut api = api();
        assert!(matches!(api.view_todos(&["one"]), Err(TodoError::Api(_))));
        assert!(matches!(api.delete_todos(&["0"]), Err(TodoError::Api(_))));
        assert!(matches!(api.update_todo("x", "y"), Err(TodoError::Api(_))));
        assert_eq!(api.store().len(), 3);
    }

    #[test]
    fn update_and_delete_dispatch() {
        let mut api = api();
        api.update_todo("2", "Run").unwrap();
        assert_eq!(api.store().find_by_id(2).unwrap().content, "Run");

        let result = api.delete_todos(&["2", "3"]).unwrap();
        assert_eq!(result.affected_todos.len(), 2);
        assert_eq!(api.list_todos(None).unwrap().listed_todos.len(), 1);
    }

    #[test]
    fn update_todos_batch() {
        let mut api = api();
        let updates = [TodoUpdate::new(1, "a"), TodoUpdate::new(3, "c")];
        let result = api.update_todos(&updates).unwrap();
        assert_eq!(result.affected_todos.len(), 2);
    }

    #[test]
    fn data_paths_reports_dir() {
        let api = api();
        let result = api.data_paths().unwrap();
        assert_eq!(result.paths, vec![PathBuf::from("/tmp/todolist-test")]);
    }

    #[test]
    fn store_mut_allows_subscribing() {
        let mut api = api();
        let seen = std::sync::Arc::new(std::sync::Mutex::new(0));
        let sink = std::sync::Arc::clone(&seen);
        api.store_mut()
            .subscribe(move |_| *sink.lock().unwrap() += 1);
        api.add_todo("x").unwrap();
        assert_eq!(*seen.lock().unwrap(), 1);
    }
}
