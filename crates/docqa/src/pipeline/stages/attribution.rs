//! Source attribution stage

use crate::pipeline::context::PipelineContext;
use crate::types::SourceCitation;

/// Format citations for the answer
///
/// Takes at most the first `max_sources` passages in retrieval order
/// (no re-ranking) and emits one citation each. Pure, no failure modes.
pub fn attribute_sources(ctx: &mut PipelineContext, max_sources: usize, excerpt_chars: usize) {
    ctx.sources = ctx
        .retrieved_passages
        .iter()
        .take(max_sources)
        .enumerate()
        .map(|(i, passage)| SourceCitation::from_passage(passage, i, excerpt_chars))
        .collect();

    ctx.record_step("source_attribution");

    tracing::info!(count = ctx.sources.len(), "Source citations added");
}
