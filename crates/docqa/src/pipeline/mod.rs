//! Query-processing pipeline
//!
//! A directed pipeline with two conditional branch points over a shared
//! mutable context. Stages run strictly in sequence; control forks after
//! query analysis and after the relevance check, and always converges to
//! a terminal stage.

pub mod context;
pub mod orchestrator;
pub mod stage;
pub mod stages;

pub use context::PipelineContext;
pub use orchestrator::{PipelineOptions, QueryPipeline};
pub use stage::StageId;
