use crate::error::{Result, TodoError};
use crate::model::{TodoId, TodoItem};
use crate::store::{StorageBackend, TodoStore};

/// Parse a user-supplied id such as `3` or `#3`.
pub fn parse_id(input: &str) -> Result<TodoId> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    match digits.parse::<TodoId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TodoError::Api(format!("Invalid todo id: {}", input))),
    }
}

pub fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<TodoId>> {
    inputs.iter().map(|s| parse_id(s.as_ref())).collect()
}

/// Split ids into the items that exist (in the order asked) and the ids that don't.
pub fn todos_by_ids<B: StorageBackend>(
    store: &TodoStore<B>,
    ids: &[TodoId],
) -> (Vec<TodoItem>, Vec<TodoId>) {
    let mut found = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();
    for id in ids {
        match store.find_by_id(*id) {
            Some(item) => found.push(item),
            None => missing.push(*id),
        }
    }
    (found, missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn parses_plain_and_hash_ids() {
        assert_eq!(parse_id("3").unwrap(), 3);
        assert_eq!(parse_id("#12").unwrap(), 12);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!(parse_id("0").is_err());
        assert!(parse_id("-1").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_ids(&["1", "x"]).is_err());
    }

    #[test]
    fn splits_found_and_missing() {
        let store = StoreFixture::seeded().store;
        let (found, missing) = todos_by_ids(&store, &[1, 9, 3]);
        let found_ids: Vec<_> = found.iter().map(|t| t.id).collect();
        assert_eq!(found_ids, vec![1, 3]);
        assert_eq!(missing, vec![9]);
    }
}
