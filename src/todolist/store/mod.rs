//! # Storage Layer
//!
//! [`TodoStore`] owns the ordered todo list and the id counter. Persistence is
//! delegated to a [`StorageBackend`], a durable key-value slot.
//!
//! ## Persistence Model
//!
//! The whole state is written on every successful mutation under two fixed keys:
//!
//! - `todos`: the item list as a JSON array, newest first
//! - `last_todo_id`: the last id handed out, as a JSON number
//!
//! On open, both keys must be present, parse, and pass [`Snapshot::check`].
//! Anything else (missing key, corrupt JSON, duplicate ids, blank content)
//! is treated as "nothing persisted" and the store starts from
//! [`Snapshot::seed`]. Rehydration never fails.
//!
//! Mutations are computed on a copy, written, then swapped in. A failed write
//! returns the error and leaves the in-memory state untouched.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key, atomic writes.
//! - [`mem_backend::MemBackend`]: for tests and memory-only sessions.
//! - [`memory::InMemoryStore`]: `TodoStore<MemBackend>` plus fixtures.
//! - [`shared::SharedTodoStore`]: mutex-guarded handle for multi-threaded hosts.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── todos.json          # Item list
//! ├── last_todo_id.json   # Id counter
//! └── config.json         # TodoConfig
//! ```
//!
//! [`Snapshot::check`]: crate::model::Snapshot::check
//! [`Snapshot::seed`]: crate::model::Snapshot::seed

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod shared;
pub mod todo_store;

pub use backend::StorageBackend;
pub use todo_store::{ListenerId, StoreEvent, TodoStore};
