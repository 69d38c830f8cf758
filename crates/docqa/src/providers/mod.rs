//! Collaborator contracts and their implementations
//!
//! The pipeline only ever sees these traits; concrete backends are
//! constructed at process start and injected.

pub mod document_store;
pub mod llm;
pub mod memory;
pub mod ollama;

pub use document_store::{DocumentChunk, DocumentStore, ScoredChunk};
pub use llm::LlmProvider;
pub use memory::MemoryStore;
pub use ollama::OllamaGenerator;
