use super::backend::StorageBackend;
use super::todo_store::TodoStore;
use crate::error::{Result, TodoError};
use crate::model::{TodoId, TodoItem};
use std::sync::{Arc, Mutex};

/// A store that can be handed to several threads.
///
/// Each call holds one lock across the whole read-modify-write of the
/// operation, so id assignment stays unique under concurrent `add`s.
pub struct SharedTodoStore<B: StorageBackend> {
    inner: Arc<Mutex<TodoStore<B>>>,
}

impl<B: StorageBackend> Clone for SharedTodoStore<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: StorageBackend> SharedTodoStore<B> {
    pub fn new(store: TodoStore<B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut TodoStore<B>) -> Result<R>) -> Result<R> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| TodoError::Store("Todo store lock poisoned".to_string()))?;
        f(&mut guard)
    }

    pub fn add(&self, content: &str) -> Result<TodoId> {
        self.with(|store| store.add(content))
    }

    pub fn find_by_id(&self, id: TodoId) -> Result<Option<TodoItem>> {
        self.with(|store| Ok(store.find_by_id(id)))
    }

    pub fn update_by_id(&self, id: TodoId, new_content: &str) -> Result<Option<TodoItem>> {
        self.with(|store| store.update_by_id(id, new_content))
    }

    pub fn remove_by_id(&self, id: TodoId) -> Result<Option<TodoItem>> {
        self.with(|store| store.remove_by_id(id))
    }

    pub fn list(&self) -> Result<Vec<TodoItem>> {
        self.with(|store| Ok(store.list().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn concurrent_adds_get_distinct_ids() {
        let shared = SharedTodoStore::new(StoreFixture::new().store);

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = shared.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|i| store.add(&format!("t{}-{}", t, i)).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "id {} handed out twice", id);
            }
        }

        assert_eq!(ids.len(), 100);
        assert_eq!(shared.with(|s| Ok(s.last_id())).unwrap(), 100);
        assert_eq!(shared.list().unwrap().len(), 100);
    }

    #[test]
    fn delegates_to_store() {
        let shared = SharedTodoStore::new(StoreFixture::seeded().store);
        let id = shared.add("Read").unwrap();
        assert_eq!(shared.find_by_id(id).unwrap().unwrap().content, "Read");
        assert!(shared.update_by_id(id, "Write").unwrap().is_some());
        assert!(shared.remove_by_id(id).unwrap().is_some());
        assert_eq!(shared.find_by_id(id).unwrap(), None);
    }
}
