//! Session-lifetime record storage.
//!
//! The store owns the ordered list of records and is the only place they
//! change. Views borrow it; the importer replaces its contents.

pub mod ids;
pub mod observer;
pub mod record_store;

pub use ids::{IdGenerator, MonotonicIds, SequentialIds};
pub use observer::{Observer, StoreEvent, SubscriptionId};
pub use record_store::RecordStore;
