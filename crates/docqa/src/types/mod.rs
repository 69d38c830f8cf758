//! Core types for the Q&A pipeline

pub mod passage;
pub mod query;
pub mod response;

pub use passage::{Passage, PassageMetadata, SourceCitation};
pub use query::QueryRequest;
pub use response::QueryResponse;
