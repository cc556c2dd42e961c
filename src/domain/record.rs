//! Item records held by the catalog.
//!
//! A record is created either by the importer (bulk) or by the add flow
//! (single, from a [`RecordDraft`]).

use serde::{Deserialize, Serialize};

/// Status given to every imported or newly added record
pub const SAVED_STATUS: &str = "Saved";

/// Authors string used when the source names nobody
pub const UNKNOWN_AUTHORS: &str = "Unknown";

/// A single book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Unique identifier (store-assigned, or the external work key)
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Comma-joined author names
    pub authors: String,

    /// Cover image URL
    pub image: String,

    /// Display status
    pub status: String,
}

impl ItemRecord {
    /// Create a record with the saved status
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        authors: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: authors.into(),
            image: image.into(),
            status: SAVED_STATUS.to_string(),
        }
    }

    /// Build a record from a draft and an assigned id
    pub fn from_draft(id: impl Into<String>, draft: RecordDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            authors: draft.authors,
            image: draft.image,
            status: draft.status,
        }
    }

    /// Everything but the id
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            title: self.title.clone(),
            authors: self.authors.clone(),
            image: self.image.clone(),
            status: self.status.clone(),
        }
    }

    /// Replace the image
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// A record without an id, as handed to `RecordStore::add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub title: String,
    pub authors: String,
    pub image: String,
    pub status: String,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            authors: String::new(),
            image: String::new(),
            status: SAVED_STATUS.to_string(),
        }
    }
}

impl RecordDraft {
    /// Create a draft with the saved status and no image
    pub fn new(title: impl Into<String>, authors: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            authors: authors.into(),
            ..Default::default()
        }
    }

    /// Set the image URL
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// True when the title is empty after trimming
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }
}
