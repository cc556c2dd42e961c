//! Category import into the record store.

use tracing::{error, info, instrument};

use super::mapping::map_works;
use super::open_library::OpenLibraryClient;
use super::{ImportError, SubjectSource};
use crate::config::ResolvedConfig;
use crate::domain::covers::DEFAULT_COVERS_BASE;
use crate::domain::ItemRecord;
use crate::store::RecordStore;

/// Category imported when none is given
pub const DEFAULT_CATEGORY: &str = "science";

/// Result of an import attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Store contents were replaced with `count` records
    Imported { category: String, count: usize },

    /// Nothing changed; the error was logged
    Failed { category: String, error: String },
}

impl ImportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ImportOutcome::Imported { .. })
    }

    /// Number of records imported (zero on failure)
    pub fn count(&self) -> usize {
        match self {
            ImportOutcome::Imported { count, .. } => *count,
            ImportOutcome::Failed { .. } => 0,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            ImportOutcome::Imported { category, .. } | ImportOutcome::Failed { category, .. } => {
                category
            }
        }
    }
}

/// Fetches a category and installs it as the store's contents
pub struct CatalogImporter<S> {
    source: S,
    covers_base: String,
    default_category: String,
}

impl CatalogImporter<OpenLibraryClient> {
    /// Importer against the configured Open Library endpoints
    pub fn from_config(config: &ResolvedConfig) -> Self {
        CatalogImporter::new(OpenLibraryClient::new(config.api_base.clone()))
            .with_covers_base(config.covers_base.clone())
            .with_default_category(config.default_category.clone())
    }
}

impl<S: SubjectSource> CatalogImporter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            covers_base: DEFAULT_COVERS_BASE.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Set the covers service used for image URLs
    pub fn with_covers_base(mut self, covers_base: impl Into<String>) -> Self {
        self.covers_base = covers_base.into();
        self
    }

    /// Set the category used for blank requests
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// The category actually requested for `category`
    pub fn resolve_category<'a>(&'a self, category: &'a str) -> &'a str {
        let trimmed = category.trim();
        if trimmed.is_empty() {
            &self.default_category
        } else {
            trimmed
        }
    }

    /// Fetch and map a category without touching any store
    pub async fn fetch_category(&self, category: &str) -> Result<Vec<ItemRecord>, ImportError> {
        let category = self.resolve_category(category);
        let response = self.source.fetch_subject(category).await?;
        Ok(map_works(response.works, &self.covers_base))
    }

    /// Import a category, replacing the store's contents on success.
    ///
    /// Failures are logged and leave the store as it was.
    #[instrument(skip(self, store))]
    pub async fn import_category(&self, store: &mut RecordStore, category: &str) -> ImportOutcome {
        let category = self.resolve_category(category).to_string();

        match self.fetch_category(&category).await {
            Ok(records) => {
                let count = records.len();
                store.replace_all(records);
                info!(source = self.source.name(), %category, count, "Catalog imported");
                ImportOutcome::Imported { category, count }
            }
            Err(e) => {
                error!(
                    source = self.source.name(),
                    %category,
                    error = %e,
                    "Catalog import failed"
                );
                ImportOutcome::Failed {
                    category,
                    error: e.to_string(),
                }
            }
        }
    }

    /// Import the default category
    pub async fn import_default(&self, store: &mut RecordStore) -> ImportOutcome {
        let category = self.default_category.clone();
        self.import_category(store, &category).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::{ItemRecord, NO_COVER_IMAGE};
    use crate::importer::{SubjectResponse, Work};

    struct FixedSource(Vec<Work>);

    #[async_trait]
    impl SubjectSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch_subject(&self, _category: &str) -> Result<SubjectResponse, ImportError> {
            Ok(SubjectResponse {
                name: None,
                work_count: None,
                works: self.0.clone(),
            })
        }
    }

    struct DownSource;

    #[async_trait]
    impl SubjectSource for DownSource {
        fn name(&self) -> &str {
            "down"
        }

        async fn fetch_subject(&self, _category: &str) -> Result<SubjectResponse, ImportError> {
            Err(ImportError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn test_resolve_category() {
        let importer = CatalogImporter::new(DownSource).with_default_category("history");
        assert_eq!(importer.resolve_category(""), "history");
        assert_eq!(importer.resolve_category("   "), "history");
        assert_eq!(importer.resolve_category(" love "), "love");
    }

    #[tokio::test]
    async fn test_import_replaces_store() {
        let importer = CatalogImporter::new(FixedSource(vec![Work {
            key: Some("/w/OL1".to_string()),
            title: Some("T".to_string()),
            authors: Some(vec![]),
            cover_id: None,
        }]));

        let mut store = RecordStore::new();
        store.replace_all(vec![ItemRecord::new("old", "Old", "A", "I")]);

        let outcome = importer.import_category(&mut store, "science").await;
        assert!(outcome.is_success());
        assert_eq!(outcome.count(), 1);
        assert_eq!(outcome.category(), "science");
        assert_eq!(
            store.records(),
            &[ItemRecord::new("/w/OL1", "T", "Unknown", NO_COVER_IMAGE)]
        );
    }

    #[tokio::test]
    async fn test_failed_import_leaves_store() {
        let importer = CatalogImporter::new(DownSource);

        let mut store = RecordStore::new();
        store.replace_all(vec![ItemRecord::new("keep", "Keep", "A", "I")]);
        let before = store.snapshot();

        let outcome = importer.import_default(&mut store).await;
        assert!(!outcome.is_success());
        assert_eq!(outcome.category(), DEFAULT_CATEGORY);
        assert_eq!(store.records(), before.as_slice());
    }
}
