//! Domain types for the bookshelf catalog.
//!
//! - Record: the item record and the draft used to create one
//! - Covers: cover URLs and the placeholder image palette

pub mod covers;
pub mod record;

// Re-export commonly used types
pub use covers::{cover_url, next_image, random_image, IMAGE_PALETTE, NEW_BOOK_IMAGE, NO_COVER_IMAGE};
pub use record::{ItemRecord, RecordDraft, SAVED_STATUS, UNKNOWN_AUTHORS};
