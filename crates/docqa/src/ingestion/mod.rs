//! Document ingestion (write path)
//!
//! Loads raw files, normalizes them into text chunks, and indexes them
//! into the document store. The query pipeline never calls into this
//! module; ingestion and querying are non-overlapping operations on the
//! shared store.

pub mod chunker;
pub mod loader;

pub use chunker::TextChunker;
pub use loader::{ingest_directory, sample_documents, DocumentLoader};
