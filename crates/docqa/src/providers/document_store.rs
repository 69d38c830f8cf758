//! Document store trait for indexing and similarity search

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::Result;

/// A normalized text chunk ready for indexing (write path)
#[derive(Debug, Clone)]
pub struct DocumentChunk {
    /// Text content
    pub content: String,
    /// Open metadata mapping; `source` and `page` are the known keys
    pub metadata: HashMap<String, serde_json::Value>,
}

impl DocumentChunk {
    /// Create a chunk with a source name
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        let mut metadata = HashMap::new();
        metadata.insert("source".to_string(), serde_json::json!(source.into()));
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Attach a page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.metadata.insert("page".to_string(), serde_json::json!(page));
        self
    }
}

/// A search hit returned by the store
///
/// `score` is a similarity in which higher means more relevant.
/// Backends whose native metric is a distance must invert it before
/// returning.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    /// Text content
    pub content: String,
    /// Open metadata mapping as stored
    pub metadata: HashMap<String, serde_json::Value>,
    /// Similarity score (higher is more relevant)
    pub score: f32,
}

/// Trait for document storage and similarity search
///
/// Implementations:
/// - `MemoryStore`: in-process lexical index (default, also used in tests)
///
/// The query pipeline only calls `similarity_search`; `add_chunks` is
/// the ingestion write path and is never invoked mid-query.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Search for the `k` chunks most similar to `query`,
    /// in descending relevance order
    async fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>>;

    /// Index a batch of chunks, returning how many were stored
    async fn add_chunks(&self, chunks: Vec<DocumentChunk>) -> Result<usize>;

    /// Total number of chunks stored
    async fn len(&self) -> Result<usize>;

    /// Check if store is empty
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Check if the store is healthy
    async fn health_check(&self) -> Result<bool>;

    /// Store name for logging
    fn name(&self) -> &str;
}
