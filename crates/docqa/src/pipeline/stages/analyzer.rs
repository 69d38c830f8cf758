//! Query analysis stage

use crate::pipeline::context::PipelineContext;

/// Questions with fewer whitespace-delimited tokens than this are too
/// vague to retrieve against
const MIN_QUESTION_TOKENS: usize = 3;

/// Inspect the question and decide the route
///
/// Flags `needs_clarification` iff the trimmed question has fewer than
/// three whitespace-delimited tokens; otherwise flags `needs_retrieval`.
/// Current policy has no other routing heuristic, so retrieval is
/// always chosen when clarification is not. Pure function of the
/// question; no failure modes.
pub fn analyze(ctx: &mut PipelineContext) {
    let token_count = ctx.question.trim().split_whitespace().count();

    ctx.needs_clarification = token_count < MIN_QUESTION_TOKENS;
    ctx.needs_retrieval = !ctx.needs_clarification;

    ctx.record_step("query_analysis");

    tracing::info!(
        needs_retrieval = ctx.needs_retrieval,
        needs_clarification = ctx.needs_clarification,
        "Query analyzed"
    );
}
