//! Form for editing an existing record by id.

use super::FormError;
use crate::domain::ItemRecord;
use crate::store::RecordStore;

/// An edit form pre-filled from a stored record.
///
/// Changes apply to the form's own copy until `submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    record: ItemRecord,
}

impl EditForm {
    /// Open the form for `id`
    pub fn open(store: &RecordStore, id: &str) -> Result<Self, FormError> {
        let record = store
            .get(id)
            .cloned()
            .ok_or_else(|| FormError::NotFound(id.to_string()))?;
        Ok(Self { record })
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// The record as currently edited
    pub fn record(&self) -> &ItemRecord {
        &self.record
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = title.into();
        self
    }

    pub fn authors(mut self, authors: impl Into<String>) -> Self {
        self.record.authors = authors.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.record.image = image.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.record.status = status.into();
        self
    }

    /// Validate and write the record back.
    ///
    /// Fails with `NotFound` if the record was deleted since the form opened;
    /// the store is not changed in that case.
    pub fn submit(self, store: &mut RecordStore) -> Result<(), FormError> {
        if self.record.title.trim().is_empty() {
            return Err(FormError::EmptyTitle);
        }

        let id = self.record.id.clone();
        if store.update(self.record) {
            Ok(())
        } else {
            Err(FormError::NotFound(id))
        }
    }
}
