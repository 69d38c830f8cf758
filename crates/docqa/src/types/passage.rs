//! Retrieved passages and source citations

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Provenance metadata attached to a passage
///
/// The document store returns an open metadata mapping; the known keys
/// (`source`, `page`) are lifted into typed fields at the retrieval
/// boundary and everything else is kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassageMetadata {
    /// Source document name, when the store recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Page number within the source document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Remaining store-specific keys, passed through untouched
    #[serde(default, flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl PassageMetadata {
    /// Metadata with only a source name
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            page: None,
            extra: HashMap::new(),
        }
    }

    /// Lift the known keys out of an open metadata mapping
    pub fn from_map(mut map: HashMap<String, serde_json::Value>) -> Self {
        let source = map
            .remove("source")
            .and_then(|v| v.as_str().map(str::to_string));
        let page = map
            .remove("page")
            .and_then(|v| v.as_u64())
            .map(|p| p as u32);
        Self {
            source,
            page,
            extra: map,
        }
    }
}

/// A unit of retrieved text with similarity score and provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    /// Text content
    pub content: String,
    /// Provenance metadata
    pub metadata: PassageMetadata,
    /// Similarity score from the document store (higher is more relevant)
    pub relevance_score: Option<f32>,
}

impl Passage {
    /// Create a new passage
    pub fn new(
        content: impl Into<String>,
        metadata: PassageMetadata,
        relevance_score: Option<f32>,
    ) -> Self {
        Self {
            content: content.into(),
            metadata,
            relevance_score,
        }
    }

    /// Display name of the source document, or `"unknown"`
    pub fn source_or_unknown(&self) -> &str {
        self.metadata.source.as_deref().unwrap_or("unknown")
    }
}

/// Citation pointing back at a source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCitation {
    /// Source document name, or a synthesized `Document <n>` placeholder
    pub document: String,
    /// Page number (if the store recorded one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Relevance score rounded to 2 decimals
    pub relevance_score: f32,
    /// Leading excerpt of the passage, ellipsized if truncated
    pub excerpt: String,
}

impl SourceCitation {
    /// Build a citation from a retrieved passage
    ///
    /// `index` is the passage's zero-based position in retrieval order,
    /// used for the placeholder name when `source` metadata is absent.
    pub fn from_passage(passage: &Passage, index: usize, excerpt_chars: usize) -> Self {
        let document = passage
            .metadata
            .source
            .clone()
            .unwrap_or_else(|| format!("Document {}", index + 1));

        let score = passage.relevance_score.unwrap_or(0.0);

        Self {
            document,
            page: passage.metadata.page,
            relevance_score: round2(score),
            excerpt: excerpt_of(&passage.content, excerpt_chars),
        }
    }
}

/// Round a score to 2 decimal places
fn round2(score: f32) -> f32 {
    (score * 100.0).round() / 100.0
}

/// Leading excerpt of `content`, with `"..."` appended iff truncated
fn excerpt_of(content: &str, max_chars: usize) -> String {
    if content.chars().count() > max_chars {
        let mut excerpt: String = content.chars().take(max_chars).collect();
        excerpt.push_str("...");
        excerpt
    } else {
        content.to_string()
    }
}
