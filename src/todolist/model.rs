use crate::error::{Result, TodoError};
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDateTime};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type TodoId = u64;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SEED_DATE: &str = "2023-05-22 00:00:00";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub content: String,
    // Stored pre-formatted; never rewritten after creation
    pub created_at: String,
}

impl TodoItem {
    pub fn new(id: TodoId, content: String, created_at: String) -> Self {
        Self {
            id,
            content,
            created_at,
        }
    }

    /// Parses `created_at` back into a timestamp, if it was written with `date_format`.
    pub fn created_at_parsed(&self, date_format: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.created_at, date_format).ok()
    }
}

/// The full persisted state of a store: items in display order plus the id counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub items: Vec<TodoItem>,
    pub last_id: TodoId,
}

impl Snapshot {
    pub fn new(items: Vec<TodoItem>, last_id: TodoId) -> Self {
        Self { items, last_id }
    }

    /// Built-in starting state used when nothing usable has been persisted.
    pub fn seed() -> Self {
        let items = [(3, "Cook"), (2, "Exercise"), (1, "Study")]
            .into_iter()
            .map(|(id, content)| TodoItem::new(id, content.to_string(), SEED_DATE.to_string()))
            .collect();
        Self { items, last_id: 3 }
    }

    pub fn max_id(&self) -> TodoId {
        self.items.iter().map(|t| t.id).max().unwrap_or(0)
    }

    /// Checks the invariants a rehydrated snapshot must hold.
    ///
    /// Ids must be positive and distinct, and every content must already be
    /// trimmed and non-empty. The counter is not checked here; see
    /// [`TodoStore`](crate::store::todo_store::TodoStore) for how a lagging
    /// counter is repaired.
    pub fn check(&self) -> std::result::Result<(), String> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.id == 0 {
                return Err("todo with id 0".to_string());
            }
            if !seen.insert(item.id) {
                return Err(format!("duplicate todo id {}", item.id));
            }
            if item.content.is_empty() || item.content.trim() != item.content {
                return Err(format!("todo {} has blank or untrimmed content", item.id));
            }
        }
        Ok(())
    }
}

/// Trims `content` and rejects it if nothing is left.
pub fn normalize_content(content: &str) -> Result<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(TodoError::Validation(
            "Todo content cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// True if chrono can render `date_format` without hitting an unknown specifier.
pub fn is_valid_date_format(date_format: &str) -> bool {
    !date_format.is_empty() && StrftimeItems::new(date_format).all(|item| item != Item::Error)
}

/// Current local time rendered with `date_format`, or with
/// [`DEFAULT_DATE_FORMAT`] if that format cannot be rendered.
pub fn now_stamp(date_format: &str) -> String {
    let format = if is_valid_date_format(date_format) {
        date_format
    } else {
        warn!("Invalid date format {:?}; using {}", date_format, DEFAULT_DATE_FORMAT);
        DEFAULT_DATE_FORMAT
    };
    Local::now().format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize_content("  study \n").unwrap(), "study");
    }

    #[test]
    fn normalize_rejects_blank() {
        assert!(normalize_content("").unwrap_err().is_validation());
        assert!(normalize_content("   \t").unwrap_err().is_validation());
    }

    #[test]
    fn seed_is_newest_first_with_counter_three() {
        let seed = Snapshot::seed();
        let ids: Vec<_> = seed.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(seed.last_id, 3);
        assert!(seed.check().is_ok());
    }

    #[test]
    fn check_rejects_duplicate_ids() {
        let item = TodoItem::new(1, "A".into(), SEED_DATE.into());
        let snap = Snapshot::new(vec![item.clone(), item], 1);
        assert!(snap.check().is_err());
    }

    #[test]
    fn check_rejects_untrimmed_content() {
        let snap = Snapshot::new(vec![TodoItem::new(1, " A".into(), SEED_DATE.into())], 1);
        assert!(snap.check().is_err());
    }

    #[test]
    fn stamp_parses_back_with_same_format() {
        let item = TodoItem::new(1, "A".into(), now_stamp(DEFAULT_DATE_FORMAT));
        assert!(item.created_at_parsed(DEFAULT_DATE_FORMAT).is_some());
    }

    #[test]
    fn date_format_validation() {
        assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("%Y-%"));
        assert!(!is_valid_date_format(""));
    }

    #[test]
    fn stamp_with_unknown_specifier_uses_default() {
        let item = TodoItem::new(1, "A".into(), now_stamp("%Q"));
        assert!(item.created_at_parsed(DEFAULT_DATE_FORMAT).is_some());
    }

    #[test]
    fn seed_date_parses_with_default_format() {
        let seed = Snapshot::seed();
        assert!(seed.items[0]
            .created_at_parsed(DEFAULT_DATE_FORMAT)
            .is_some());
    }
}
