use crate::error::Result;

/// Key under which the serialized item list is kept.
pub const TODOS_KEY: &str = "todos";

/// Key under which the last assigned id is kept.
pub const LAST_ID_KEY: &str = "last_todo_id";

/// Abstract interface for a durable key-value slot.
/// This trait handles the "how" of persistence (filesystem vs memory),
/// while TodoStore handles the "what" (ordering, ids, validation, fallback).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing what was there.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Human-readable location of the slot, for `todo path`.
    fn location(&self) -> String;
}
