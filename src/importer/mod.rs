//! Catalog import from a subject-search source.
//!
//! A [`SubjectSource`] fetches one page of works for a category; the
//! [`CatalogImporter`] maps them into records and replaces the store.

pub mod catalog;
pub mod mapping;
pub mod open_library;

use async_trait::async_trait;
use thiserror::Error;

pub use catalog::{CatalogImporter, ImportOutcome, DEFAULT_CATEGORY};
pub use mapping::{join_authors, map_work, map_works};
pub use open_library::{OpenLibraryClient, SubjectResponse, Work, WorkAuthor, DEFAULT_API_BASE};

/// Errors raised while fetching a subject listing
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Subject API returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed subject response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Subject source unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can list the works of a subject
#[async_trait]
pub trait SubjectSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Fetch the first page of works for `category`
    async fn fetch_subject(&self, category: &str) -> Result<SubjectResponse, ImportError>;
}
