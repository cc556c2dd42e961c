//! In-memory record store.
//!
//! Holds the session's records in insertion order. Every change goes through
//! `replace_all`, `add`, `update` or `delete`, and every one of those calls is
//! pushed to the subscribed observers before it returns, including update and
//! delete calls that name an unknown id.

use std::fmt;

use tracing::debug;

use super::ids::{IdGenerator, MonotonicIds};
use super::observer::{Observer, Observers, StoreEvent, SubscriptionId};
use crate::domain::{ItemRecord, RecordDraft};

/// Ordered, observable collection of item records
pub struct RecordStore {
    records: Vec<ItemRecord>,
    ids: Box<dyn IdGenerator>,
    observers: Observers,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records)
            .field("observers", &self.observers)
            .finish()
    }
}

impl RecordStore {
    /// Create an empty store with timestamp-derived ids
    pub fn new() -> Self {
        Self::with_id_generator(MonotonicIds::new())
    }

    /// Create an empty store with a custom id source
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            records: Vec::new(),
            ids: Box::new(ids),
            observers: Observers::default(),
        }
    }

    /// Register an observer; it sees every change made after this call
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[ItemRecord]) + Send + 'static,
    {
        let observer: Observer = Box::new(observer);
        self.observers.subscribe(observer)
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Discard the current contents and install `records` in their order
    pub fn replace_all(&mut self, records: Vec<ItemRecord>) {
        self.records = records;
        debug!(count = self.records.len(), "Store contents replaced");
        self.emit(StoreEvent::Replaced {
            count: self.records.len(),
        });
    }

    /// Append a new record built from `draft` and return its assigned id
    pub fn add(&mut self, draft: RecordDraft) -> String {
        let id = self.fresh_id();
        self.records.push(ItemRecord::from_draft(id.clone(), draft));
        debug!(%id, "Record added");
        self.emit(StoreEvent::Added { id: id.clone() });
        id
    }

    /// Replace the record with the same id, keeping its position.
    ///
    /// Unknown ids leave the store untouched and return false.
    pub fn update(&mut self, record: ItemRecord) -> bool {
        let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) else {
            debug!(id = %record.id, "Update ignored, no such record");
            self.emit(StoreEvent::Unmatched { id: record.id });
            return false;
        };

        let id = record.id.clone();
        *existing = record;
        debug!(%id, "Record updated");
        self.emit(StoreEvent::Updated { id });
        true
    }

    /// Remove the record with `id`, returning it if it was present
    pub fn delete(&mut self, id: &str) -> Option<ItemRecord> {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            debug!(%id, "Delete ignored, no such record");
            self.emit(StoreEvent::Unmatched { id: id.to_string() });
            return None;
        };
        let removed = self.records.remove(pos);
        debug!(%id, "Record deleted");
        self.emit(StoreEvent::Deleted { id: id.to_string() });
        Some(removed)
    }

    /// Current contents in order
    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    /// Owned copy of the current contents
    pub fn snapshot(&self) -> Vec<ItemRecord> {
        self.records.clone()
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> Option<&ItemRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Whether a record with `id` exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Records from `replace_all` may already use an id the generator hands
    // out, so skip until an unused one comes up.
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    fn emit(&mut self, event: StoreEvent) {
        self.observers.notify(&event, &self.records);
    }
}
