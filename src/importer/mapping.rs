//! Work → record mapping.
//!
//! Order-preserving and one-to-one; the only logic is the substitution of
//! defaults for missing authors and covers.

use super::open_library::{Work, WorkAuthor};
use crate::domain::{cover_url, ItemRecord, SAVED_STATUS, UNKNOWN_AUTHORS};

/// Map every work to a record, keeping their order
pub fn map_works(works: Vec<Work>, covers_base: &str) -> Vec<ItemRecord> {
    works
        .into_iter()
        .map(|work| map_work(work, covers_base))
        .collect()
}

/// Map a single work
pub fn map_work(work: Work, covers_base: &str) -> ItemRecord {
    ItemRecord {
        id: work.key.unwrap_or_default(),
        title: work.title.unwrap_or_default(),
        authors: join_authors(work.authors.as_deref()),
        image: cover_url(covers_base, work.cover_id),
        status: SAVED_STATUS.to_string(),
    }
}

/// Comma-join author names; "Unknown" when that yields nothing
pub fn join_authors(authors: Option<&[WorkAuthor]>) -> String {
    let joined = authors
        .unwrap_or_default()
        .iter()
        .map(|a| a.name.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        UNKNOWN_AUTHORS.to_string()
    } else {
        joined
    }
}
