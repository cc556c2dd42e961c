//! Views over the record store.
//!
//! - List: ordered rows, plus the copy and cycle-image actions
//! - Add: a draft form validated before it reaches the store
//! - Edit: a form bound to an existing record id
//!
//! Views hold no records of their own beyond the form being edited; they read
//! the store through `&RecordStore` and change it through `&mut RecordStore`.

pub mod add;
pub mod edit;
pub mod list;

use thiserror::Error;

pub use add::AddForm;
pub use edit::EditForm;
pub use list::{copy_with_next_image, cycle_image, ListView};

/// Errors raised by the add and edit forms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Book not found: {0}")]
    NotFound(String),
}
