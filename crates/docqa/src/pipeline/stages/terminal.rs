//! Terminal leaf stages: fallback and clarification

use crate::pipeline::context::PipelineContext;

/// Fixed fallback message when retrieval was too weak to answer from
pub const FALLBACK_ANSWER: &str = "I apologize, but I couldn't find relevant information in the documentation to answer your question.

This could be because:
- The topic is not covered in the available documentation
- Your question might need rephrasing for better results
- The information might be in a different section

Could you please rephrase your question or provide more context?";

/// Fixed prompt asking the user to elaborate
pub const CLARIFICATION_PROMPT: &str =
    "Could you please provide more details or rephrase your question?";

/// Degraded terminal: no relevant passages to answer from
///
/// Sets the fixed guidance message, forces confidence to zero and the
/// citation list to empty. No collaborators, no failure modes.
pub fn fallback(ctx: &mut PipelineContext) {
    ctx.answer = FALLBACK_ANSWER.to_string();
    ctx.confidence = 0.0;
    ctx.sources = Vec::new();
    ctx.record_step("fallback");

    tracing::info!("Fallback response issued");
}

/// Terminal for questions flagged as too vague
///
/// Sets the clarification prompt without setting an answer.
pub fn clarify(ctx: &mut PipelineContext) {
    ctx.clarification_question = Some(CLARIFICATION_PROMPT.to_string());
    ctx.record_step("clarification");

    tracing::info!("Clarification requested");
}
