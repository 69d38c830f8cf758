//! Stage identifiers and the transition table

use super::context::PipelineContext;

/// Identifier of a pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageId {
    /// Initial stage: inspect the question
    QueryAnalysis,
    /// Fetch candidate passages from the document store
    Retrieval,
    /// Score aggregate confidence over the retrieved passages
    RelevanceCheck,
    /// Produce an answer from the passages via the LLM
    Generation,
    /// Format citations for the answer (terminal)
    SourceAttribution,
    /// Degraded answer when retrieval was too weak (terminal)
    Fallback,
    /// Ask the user to elaborate (terminal)
    Clarification,
}

impl StageId {
    /// Name recorded in the audit trail
    pub fn name(&self) -> &'static str {
        match self {
            Self::QueryAnalysis => "query_analysis",
            Self::Retrieval => "retrieval",
            Self::RelevanceCheck => "relevance_check",
            Self::Generation => "generation",
            Self::SourceAttribution => "source_attribution",
            Self::Fallback => "fallback",
            Self::Clarification => "clarification",
        }
    }

    /// Whether the pipeline stops after this stage
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::SourceAttribution | Self::Fallback | Self::Clarification
        )
    }
}

/// Transition table: next stage for (current stage, context)
///
/// Two conditional edges: after analysis (clarify / retrieve / generate
/// directly) and after the relevance check (generate / fall back). The
/// direct-generation edge out of analysis is kept representable for
/// future heuristics even though the current analyzer never selects it.
pub fn next_stage(
    current: StageId,
    ctx: &PipelineContext,
    relevance_threshold: f32,
) -> Option<StageId> {
    match current {
        StageId::QueryAnalysis => {
            if ctx.needs_clarification {
                Some(StageId::Clarification)
            } else if ctx.needs_retrieval {
                Some(StageId::Retrieval)
            } else {
                Some(StageId::Generation)
            }
        }
        StageId::Retrieval => Some(StageId::RelevanceCheck),
        StageId::RelevanceCheck => {
            if ctx.confidence >= relevance_threshold {
                Some(StageId::Generation)
            } else {
                Some(StageId::Fallback)
            }
        }
        StageId::Generation => Some(StageId::SourceAttribution),
        StageId::SourceAttribution | StageId::Fallback | StageId::Clarification => None,
    }
}
