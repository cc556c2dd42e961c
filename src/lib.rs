//! bookshelf - In-memory book catalog manager
//!
//! Fetches a subject listing from Open Library, keeps the resulting books in
//! an in-memory store for the length of a session, and lets the user list,
//! add, edit and delete them.
//!
//! # Architecture
//!
//! - The store is the single owner of the session's records
//! - Every change goes through one of four operations and is observable
//! - The importer replaces the store's contents wholesale, or not at all
//!
//! # Modules
//!
//! - `domain`: Data structures (ItemRecord, RecordDraft, cover URLs)
//! - `store`: RecordStore, id generators, observers
//! - `importer`: Subject source trait, Open Library client, mapping
//! - `views`: List view, add and edit forms
//! - `cli`: Command-line interface and interactive shell
//!
//! # Usage
//!
//! ```bash
//! # Print the books of a subject
//! bookshelf list fantasy
//!
//! # Start an interactive session
//! bookshelf shell --category science
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod importer;
pub mod store;
pub mod views;

// Re-export main types at crate root for convenience
pub use domain::{ItemRecord, RecordDraft};
pub use importer::{CatalogImporter, ImportError, ImportOutcome, OpenLibraryClient, SubjectSource};
pub use store::{RecordStore, StoreEvent};
pub use views::{AddForm, EditForm, FormError, ListView};
