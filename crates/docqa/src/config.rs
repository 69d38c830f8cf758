//! Configuration for the Q&A system

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main system configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QaConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Retrieval and relevance-gate configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    /// LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Chunking configuration (ingestion write path)
    #[serde(default)]
    pub chunking: ChunkingConfig,
}

impl QaConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("Invalid config: {}", e)))
    }

    /// Load from the path in `DOCQA_CONFIG`, falling back to defaults
    pub fn load() -> Result<Self> {
        match std::env::var("DOCQA_CONFIG") {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of passages to request from the document store
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Minimum mean relevance required to take the generation path
    #[serde(default = "default_relevance_threshold")]
    pub relevance_threshold: f32,
    /// Maximum number of source citations attached to an answer
    #[serde(default = "default_max_sources")]
    pub max_sources: usize,
    /// Excerpt length in characters for citations
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

fn default_top_k() -> usize {
    5
}

fn default_relevance_threshold() -> f32 {
    0.3
}

fn default_max_sources() -> usize {
    3
}

fn default_excerpt_chars() -> usize {
    200
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            relevance_threshold: 0.3,
            max_sources: 3,
            excerpt_chars: 200,
        }
    }
}

/// LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the Ollama server
    pub base_url: String,
    /// Model used for answer generation
    pub model: String,
    /// Sampling temperature (kept low for near-deterministic answers)
    pub temperature: f32,
    /// Request timeout in seconds; a timeout counts as a generation failure
    pub timeout_secs: u64,
    /// Maximum retries for transient failures
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2:3b".to_string(),
            temperature: 0.1,
            timeout_secs: 60,
            max_retries: 2,
        }
    }
}

/// Chunking configuration for document ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in characters
    pub chunk_size: usize,
    /// Overlap between consecutive chunks
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
        }
    }
}
