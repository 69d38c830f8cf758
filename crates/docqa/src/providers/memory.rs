//! In-process lexical document store
//!
//! Default backend: scores chunks by term overlap with the query, with
//! no external index or embedding service. Deterministic, which also
//! makes it the reference backend for tests.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;
use uuid::Uuid;

use crate::error::Result;

use super::document_store::{DocumentChunk, DocumentStore, ScoredChunk};

/// An indexed chunk with its precomputed term set
struct IndexedChunk {
    chunk: DocumentChunk,
    terms: HashSet<String>,
}

/// In-memory lexical store
#[derive(Default)]
pub struct MemoryStore {
    chunks: DashMap<Uuid, IndexedChunk>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercased alphanumeric terms of `text`
    fn terms(text: &str) -> HashSet<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.len() >= 2)
            .map(str::to_string)
            .collect()
    }

    /// Fraction of query terms present in the chunk, in [0, 1]
    fn similarity(query_terms: &HashSet<String>, chunk_terms: &HashSet<String>) -> f32 {
        if query_terms.is_empty() {
            return 0.0;
        }
        let matched = query_terms.intersection(chunk_terms).count();
        matched as f32 / query_terms.len() as f32
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>> {
        let query_terms = Self::terms(query);

        let mut hits: Vec<ScoredChunk> = self
            .chunks
            .iter()
            .filter_map(|entry| {
                let score = Self::similarity(&query_terms, &entry.terms);
                if score > 0.0 {
                    Some(ScoredChunk {
                        content: entry.chunk.content.clone(),
                        metadata: entry.chunk.metadata.clone(),
                        score,
                    })
                } else {
                    None
                }
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(k);

        Ok(hits)
    }

    async fn add_chunks(&self, chunks: Vec<DocumentChunk>) -> Result<usize> {
        let count = chunks.len();
        for chunk in chunks {
            let terms = Self::terms(&chunk.content);
            self.chunks.insert(Uuid::new_v4(), IndexedChunk { chunk, terms });
        }
        Ok(count)
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.chunks.len())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "memory-lexical"
    }
}
