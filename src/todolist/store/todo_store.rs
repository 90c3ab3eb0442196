use super::backend::{StorageBackend, LAST_ID_KEY, TODOS_KEY};
use crate::error::{Result, TodoError};
use crate::model::{normalize_content, now_stamp, Snapshot, TodoId, TodoItem, DEFAULT_DATE_FORMAT};
use log::{debug, warn};

/// What changed, delivered to listeners after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(TodoItem),
    Updated(TodoItem),
    Removed(TodoItem),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn FnMut(&StoreEvent) + Send>;

/// The authoritative ordered list of todos plus the id counter.
///
/// Every mutation builds the next item list, writes it through the backend
/// (when persistence is on) and only then swaps it in, so a failed write
/// leaves the store exactly as it was.
pub struct TodoStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    items: Vec<TodoItem>,
    last_id: TodoId,
    persist: bool,
    date_format: String,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<B: StorageBackend> TodoStore<B> {
    /// Open a store over `backend`, rehydrating persisted state or falling
    /// back to the seed list.
    pub fn open(backend: B) -> Self {
        let snapshot = match load_snapshot(&backend) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                debug!("Nothing persisted at {}; using seed todos", backend.location());
                Snapshot::seed()
            }
            Err(reason) => {
                warn!("Ignoring persisted todos ({}); using seed todos", reason);
                Snapshot::seed()
            }
        };
        Self::from_snapshot(backend, snapshot)
    }

    /// Build a store with a known initial state, ignoring anything persisted.
    pub fn from_snapshot(backend: B, snapshot: Snapshot) -> Self {
        Self {
            backend,
            items: snapshot.items,
            last_id: snapshot.last_id,
            persist: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn with_persistence(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn with_date_format(mut self, date_format: &str) -> Self {
        self.date_format = date_format.to_string();
        self
    }

    pub fn persists(&self) -> bool {
        self.persist
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last_id(&self) -> TodoId {
        self.last_id
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.items.clone(), self.last_id)
    }

    pub fn position_of(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    pub fn find_by_id(&self, id: TodoId) -> Option<TodoItem> {
        self.items.iter().find(|t| t.id == id).cloned()
    }

    /// Add a todo at the head of the list and return its id.
    pub fn add(&mut self, content: &str) -> Result<TodoId> {
        let content = normalize_content(content)?;
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| TodoError::Store("Todo id counter exhausted".to_string()))?;

        let item = TodoItem::new(id, content, now_stamp(&self.date_format));
        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(item.clone());
        next.extend(self.items.iter().cloned());

        self.commit(next, id, StoreEvent::Added(item))?;
        Ok(id)
    }

    /// Replace the content of todo `id`. Returns the updated item, or `None`
    /// if no todo has that id.
    pub fn update_by_id(&mut self, id: TodoId, new_content: &str) -> Result<Option<TodoItem>> {
        let content = normalize_content(new_content)?;
        match self.position_of(id) {
            Some(index) => self.replace_content(index, content).map(Some),
            None => Ok(None),
        }
    }

    /// Positional variant of [`update_by_id`](Self::update_by_id).
    pub fn update_at(&mut self, index: usize, new_content: &str) -> Result<Option<TodoItem>> {
        let content = normalize_content(new_content)?;
        if index >= self.items.len() {
            return Ok(None);
        }
        self.replace_content(index, content).map(Some)
    }

    /// Remove todo `id`. Returns the removed item, or `None` if absent.
    pub fn remove_by_id(&mut self, id: TodoId) -> Result<Option<TodoItem>> {
        match self.position_of(id) {
            Some(index) => self.remove_index(index).map(Some),
            None => Ok(None),
        }
    }

    /// Positional variant of [`remove_by_id`](Self::remove_by_id).
    pub fn remove_at(&mut self, index: usize) -> Result<Option<TodoItem>> {
        if index >= self.items.len() {
            return Ok(None);
        }
        self.remove_index(index).map(Some)
    }

    /// Register a callback run after every successful mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn replace_content(&mut self, index: usize, content: String) -> Result<TodoItem> {
        let mut next = self.items.clone();
        next[index].content = content;
        let updated = next[index].clone();
        self.commit(next, self.last_id, StoreEvent::Updated(updated.clone()))?;
        Ok(updated)
    }

    fn remove_index(&mut self, index: usize) -> Result<TodoItem> {
        let mut next = self.items.clone();
        let removed = next.remove(index);
        self.commit(next, self.last_id, StoreEvent::Removed(removed.clone()))?;
        Ok(removed)
    }

    fn commit(&mut self, items: Vec<TodoItem>, last_id: TodoId, event: StoreEvent) -> Result<()> {
        if self.persist {
            self.write_state(&items, last_id)?;
        }
        self.items = items;
        self.last_id = last_id;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
        Ok(())
    }

    fn write_state(&self, items: &[TodoItem], last_id: TodoId) -> Result<()> {
        // Counter first: a crash between the two writes leaves a gap in ids,
        // never a reused one.
        let counter = serde_json::to_string(&last_id).map_err(TodoError::Serialization)?;
        let todos = serde_json::to_string_pretty(items).map_err(TodoError::Serialization)?;
        self.backend.write(LAST_ID_KEY, &counter)?;
        self.backend.write(TODOS_KEY, &todos)?;
        debug!(
            "Persisted {} todos (last id {}) to {}",
            items.len(),
            last_id,
            self.backend.location()
        );
        Ok(())
    }
}

/// Read both slots and validate them. `Ok(None)` means a slot is empty; any
/// other failure is reported as a reason string. Either way the caller falls
/// back to the seed state.
fn load_snapshot<B: StorageBackend>(backend: &B) -> std::result::Result<Option<Snapshot>, String> {
    let raw_items = backend
        .read(TODOS_KEY)
        .map_err(|e| format!("cannot read {}: {}", TODOS_KEY, e))?;
    let raw_last_id = backend
        .read(LAST_ID_KEY)
        .map_err(|e| format!("cannot read {}: {}", LAST_ID_KEY, e))?;
    let (Some(raw_items), Some(raw_last_id)) = (raw_items, raw_last_id) else {
        return Ok(None);
    };

    let items: Vec<TodoItem> = serde_json::from_str(&raw_items)
        .map_err(|e| format!("corrupt {}: {}", TODOS_KEY, e))?;
    let last_id: TodoId = serde_json::from_str(raw_last_id.trim())
        .map_err(|e| format!("corrupt {}: {}", LAST_ID_KEY, e))?;

    let mut snapshot = Snapshot::new(items, last_id);
    snapshot.check()?;

    let max_id = snapshot.max_id();
    if snapshot.last_id < max_id {
        warn!(
            "Persisted todo counter {} is behind highest id {}; raising it",
            snapshot.last_id, max_id
        );
        snapshot.last_id = max_id;
    }

    debug!(
        "Rehydrated {} todos (last id {}) from {}",
        snapshot.items.len(),
        snapshot.last_id,
        backend.location()
    );
    Ok(Some(snapshot))
}
