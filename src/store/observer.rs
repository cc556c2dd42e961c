//! Change notification for the record store.

use std::fmt;

use crate::domain::ItemRecord;

/// What changed in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Contents replaced wholesale
    Replaced { count: usize },

    /// A record was appended
    Added { id: String },

    /// A record was replaced in place
    Updated { id: String },

    /// A record was removed
    Deleted { id: String },

    /// An update or delete named an id the store does not hold
    Unmatched { id: String },
}

impl fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEvent::Replaced { count } => write!(f, "replaced ({} records)", count),
            StoreEvent::Added { id } => write!(f, "added {}", id),
            StoreEvent::Updated { id } => write!(f, "updated {}", id),
            StoreEvent::Deleted { id } => write!(f, "deleted {}", id),
            StoreEvent::Unmatched { id } => write!(f, "no record {}", id),
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked with the event and the contents after the change
pub type Observer = Box<dyn FnMut(&StoreEvent, &[ItemRecord]) + Send>;

/// Registered observers, notified in subscription order
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &StoreEvent, records: &[ItemRecord]) {
        for (_, observer) in self.entries.iter_mut() {
            observer(event, records);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
