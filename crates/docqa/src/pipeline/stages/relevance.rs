//! Relevance gate stage

use crate::pipeline::context::PipelineContext;

/// Score aggregate confidence over the retrieved passages
///
/// Empty retrieval scores 0.0. Otherwise the confidence is the
/// arithmetic mean of the passages' relevance scores (missing scores
/// count as 0), clamped to at most 1.0 in case a collaborator returns
/// malformed scores. Pure function; no failure modes.
pub fn check_relevance(ctx: &mut PipelineContext) {
    if ctx.retrieved_passages.is_empty() {
        ctx.confidence = 0.0;
        tracing::info!("No passages retrieved, confidence: 0.0");
    } else {
        let sum: f32 = ctx
            .retrieved_passages
            .iter()
            .map(|p| p.relevance_score.unwrap_or(0.0))
            .sum();
        let mean = sum / ctx.retrieved_passages.len() as f32;
        ctx.confidence = mean.min(1.0);
        tracing::info!(confidence = ctx.confidence, "Relevance checked");
    }

    ctx.record_step("relevance_check");
}
