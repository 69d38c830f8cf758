//! Stage logic
//!
//! Each stage is a function over the shared context. Pure stages take
//! only the context; the retrieval and generation stages additionally
//! call their collaborator and absorb its failures locally.

pub mod analyzer;
pub mod attribution;
pub mod generator;
pub mod relevance;
pub mod retriever;
pub mod terminal;
