//! Form for creating a record.

use super::FormError;
use crate::domain::{RecordDraft, NEW_BOOK_IMAGE};
use crate::store::RecordStore;

/// A new-record form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub draft: RecordDraft,
}

impl Default for AddForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AddForm {
    /// Blank title and authors, the new-book image, saved status
    pub fn new() -> Self {
        Self {
            draft: RecordDraft::default().with_image(NEW_BOOK_IMAGE),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.draft.title = title.into();
        self
    }

    pub fn authors(mut self, authors: impl Into<String>) -> Self {
        self.draft.authors = authors.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.draft.image = image.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.draft.status = status.into();
        self
    }

    /// Validate and add the draft; returns the new record's id
    pub fn submit(self, store: &mut RecordStore) -> Result<String, FormError> {
        if self.draft.has_blank_title() {
            return Err(FormError::EmptyTitle);
        }
        Ok(store.add(self.draft))
    }
}
