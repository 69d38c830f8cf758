//! docqa: document Q&A with retrieval, relevance gating, and cited answers
//!
//! Answers natural-language questions over a private document corpus.
//! The core is a staged query pipeline: analyze the question, retrieve
//! candidate passages, gate on aggregate relevance, generate a grounded
//! answer, and attach source citations. Retrieval failures and weak
//! matches degrade into the response instead of aborting the run. The
//! document store and the
//! language-generation service are injected collaborators behind narrow
//! traits.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod pipeline;
pub mod providers;
pub mod server;
pub mod types;

pub use config::QaConfig;
pub use error::{Error, Result};
pub use pipeline::{PipelineContext, PipelineOptions, QueryPipeline, StageId};
pub use providers::{DocumentStore, LlmProvider, MemoryStore, OllamaGenerator};
pub use types::{Passage, PassageMetadata, QueryRequest, QueryResponse, SourceCitation};
