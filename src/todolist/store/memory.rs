use super::mem_backend::MemBackend;
use super::todo_store::TodoStore;

pub type InMemoryStore = TodoStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// A fresh store over an empty memory slot, so it starts from the seed list.
    pub fn new() -> Self {
        TodoStore::open(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Snapshot;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// Empty store, counter at zero.
        pub fn new() -> Self {
            Self {
                store: TodoStore::from_snapshot(MemBackend::new(), Snapshot::new(Vec::new(), 0)),
            }
        }

        /// Store holding the built-in seed list (ids 3, 2, 1).
        pub fn seeded() -> Self {
            Self {
                store: TodoStore::from_snapshot(MemBackend::new(), Snapshot::seed()),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.add(&format!("Task {}", i + 1)).unwrap();
            }
            self
        }

        pub fn with_todo(mut self, content: &str) -> Self {
            self.store.add(content).unwrap();
            self
        }
    }
}
