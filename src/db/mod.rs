use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::Document;

/// Failure to obtain a usable document. The text of these errors is for logs
/// only and must never be sent to clients.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog document is empty")]
    Empty,
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Where the catalog document lives. Re-read on every load.
#[derive(Debug, Clone)]
pub enum Source {
    File(PathBuf),
    Inline(Arc<str>),
}

/// Result of a single read of the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    /// The source was readable but blank.
    Empty,
    Loaded(Document),
}

impl Snapshot {
    /// Collapse to a document, treating a blank source as unreadable.
    pub fn require(self) -> SourceResult<Document> {
        match self {
            Snapshot::Loaded(doc) => Ok(doc),
            Snapshot::Empty => Err(SourceError::Empty),
        }
    }
}

impl Source {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Source::File(path.as_ref().to_path_buf())
    }

    pub fn inline(text: impl Into<Arc<str>>) -> Self {
        Source::Inline(text.into())
    }

    pub async fn read_raw(&self) -> SourceResult<String> {
        match self {
            Source::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                }),
            Source::Inline(text) => Ok(text.to_string()),
        }
    }

    /// Read and parse the current document.
    pub async fn load(&self) -> SourceResult<Snapshot> {
        let raw = self.read_raw().await?;
        if raw.trim().is_empty() {
            debug!("Catalog source is blank");
            return Ok(Snapshot::Empty);
        }

        let doc: Document = serde_json::from_str(&raw)?;

        let dup_products = doc.duplicate_product_ids();
        if !dup_products.is_empty() {
            warn!(ids = ?dup_products, "Duplicate product ids; first occurrence wins");
        }
        let dup_categories = doc.duplicate_category_ids();
        if !dup_categories.is_empty() {
            warn!(ids = ?dup_categories, "Duplicate category ids; first occurrence wins");
        }

        debug!(
            products = doc.products.len(),
            categories = doc.categories.len(),
            "Loaded catalog document"
        );
        Ok(Snapshot::Loaded(doc))
    }

    /// Load a document, failing on a blank source.
    pub async fn load_document(&self) -> SourceResult<Document> {
        self.load().await?.require()
    }
}
