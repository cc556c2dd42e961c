//! List view and the per-row actions it offers.

use rand::Rng;

use crate::domain::covers::{in_palette, next_image, random_image};
use crate::domain::{ItemRecord, RecordDraft};
use crate::store::RecordStore;

/// Shown in place of the table when the store is empty
pub const EMPTY_MESSAGE: &str = "No books found.";

const TITLE_WIDTH: usize = 40;
const AUTHORS_WIDTH: usize = 28;

/// Read-only view of the store's current records
pub struct ListView<'a> {
    store: &'a RecordStore,
}

impl<'a> ListView<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Rows in store order
    pub fn rows(&self) -> &'a [ItemRecord] {
        self.store.records()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Plain-text table of all rows
    pub fn render(&self) -> String {
        if self.is_empty() {
            return format!("{}\n", EMPTY_MESSAGE);
        }

        let id_width = self
            .rows()
            .iter()
            .map(|r| r.id.chars().count())
            .max()
            .unwrap_or(0)
            .max(2);

        let mut out = format!(
            "{:<id_width$}  {:<TITLE_WIDTH$}  {:<AUTHORS_WIDTH$}  {}\n",
            "ID", "TITLE", "AUTHORS", "STATUS"
        );
        out.push_str(&"-".repeat(id_width + TITLE_WIDTH + AUTHORS_WIDTH + 14));
        out.push('\n');

        for record in self.rows() {
            out.push_str(&format!(
                "{:<id_width$}  {:<TITLE_WIDTH$}  {:<AUTHORS_WIDTH$}  {}\n",
                record.id,
                truncate(&record.title, TITLE_WIDTH),
                truncate(&record.authors, AUTHORS_WIDTH),
                record.status
            ));
        }

        out.push_str(&format!("\nTotal: {} books\n", self.rows().len()));
        out
    }
}

/// Multi-line description of a single record
pub fn render_detail(record: &ItemRecord) -> String {
    format!(
        "  ID:      {}\n  Title:   {}\n  Authors: {}\n  Image:   {}\n  Status:  {}\n",
        record.id, record.title, record.authors, record.image, record.status
    )
}

/// Cut `text` to at most `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Add a copy of record `id` with a different palette image.
///
/// The copy gets a fresh id and " (Copy)" appended to its title. Its image is
/// the next palette entry, or a random one when the original's image is not
/// from the palette. Returns the copy's id, or None if `id` is unknown.
pub fn copy_with_next_image<R: Rng + ?Sized>(
    store: &mut RecordStore,
    id: &str,
    rng: &mut R,
) -> Option<String> {
    let original = store.get(id)?;

    let image = if in_palette(&original.image) {
        next_image(&original.image)
    } else {
        random_image(rng)
    };

    let draft = RecordDraft {
        title: format!("{} (Copy)", original.title),
        authors: original.authors.clone(),
        image: image.to_string(),
        status: original.status.clone(),
    };

    Some(store.add(draft))
}

/// Move record `id` to the next palette image. Returns false if unknown.
pub fn cycle_image(store: &mut RecordStore, id: &str) -> bool {
    let Some(record) = store.get(id) else {
        return false;
    };

    let updated = record.clone().with_image(next_image(&record.image));
    store.update(updated)
}
