//! Open Library subjects API client.
//!
//! Endpoint: GET {base}/subjects/{category}.json
//! Auth: none. Only the first page of works is read.

use async_trait::async_trait;
use serde::Deserialize;

use super::{ImportError, SubjectSource};

/// Default API host
pub const DEFAULT_API_BASE: &str = "https://openlibrary.org";

/// Response body of the subjects endpoint (fields we use)
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectResponse {
    /// Subject display name
    #[serde(default)]
    pub name: Option<String>,

    /// Total number of works for the subject (not just this page)
    #[serde(default)]
    pub work_count: Option<u64>,

    /// Works on this page
    pub works: Vec<Work>,
}

/// One work in a subject listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Work {
    /// Work key, e.g. "/works/OL45804W"
    pub key: Option<String>,

    pub title: Option<String>,

    pub authors: Option<Vec<WorkAuthor>>,

    /// Cover image id on the covers service
    pub cover_id: Option<i64>,
}

/// Author reference inside a work
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkAuthor {
    pub name: Option<String>,
    pub key: Option<String>,
}

/// Subjects API client
pub struct OpenLibraryClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for OpenLibraryClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl OpenLibraryClient {
    /// Create a client against `base_url` (no trailing path)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the subject URL for a category
    pub fn subject_url(&self, category: &str) -> String {
        format!(
            "{}/subjects/{}.json",
            self.base_url.trim_end_matches('/'),
            category
        )
    }
}

#[async_trait]
impl SubjectSource for OpenLibraryClient {
    fn name(&self) -> &str {
        "openlibrary"
    }

    async fn fetch_subject(&self, category: &str) -> Result<SubjectResponse, ImportError> {
        let url = self.subject_url(category);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ImportError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ImportError::Request {
                url: url.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| ImportError::Decode { url, source })
    }
}
