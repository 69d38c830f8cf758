//! Pipeline context: the mutable record threaded through all stages

use crate::types::{Passage, QueryResponse, SourceCitation};

/// State threaded through the pipeline for the lifetime of one query
///
/// Created fresh per question, flows through the stages exactly once,
/// and is consumed when the final response is extracted. Never reused
/// across queries; concurrent queries each own their own context.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    /// The question being answered; immutable after creation
    pub question: String,
    /// Opaque session correlation token, passed through unchanged
    pub session_id: Option<String>,
    /// Passages populated by the retrieval stage, in retrieval order
    pub retrieved_passages: Vec<Passage>,
    /// Decided once by the analyzer; never revisited
    pub needs_retrieval: bool,
    /// Decided once by the analyzer; never revisited
    pub needs_clarification: bool,
    /// Prompt back to the user when the question was too vague
    pub clarification_question: Option<String>,
    /// Aggregate confidence in [0, 1], set by the relevance gate
    pub confidence: f32,
    /// Final answer; written by exactly one of generation, fallback
    pub answer: String,
    /// Citations, set by source attribution on the generation path only
    pub sources: Vec<SourceCitation>,
    /// Append-only audit trail; every stage appends its name exactly once
    pub steps_taken: Vec<String>,
    /// First failure encountered; never cleared
    pub error: Option<String>,
}

impl PipelineContext {
    /// Create a fresh context for one incoming question
    pub fn new(question: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            question: question.into(),
            session_id,
            ..Self::default()
        }
    }

    /// Append a stage name to the audit trail
    pub fn record_step(&mut self, name: &str) {
        self.steps_taken.push(name.to_string());
    }

    /// Record a failure message; only the first one sticks
    pub fn record_error(&mut self, message: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(message.into());
        }
    }

    /// Extract the final response, consuming the context
    pub fn into_response(self) -> QueryResponse {
        QueryResponse {
            answer: self.answer,
            sources: self.sources,
            confidence: self.confidence,
            steps_taken: self.steps_taken,
            error: self.error,
            clarification_question: self.clarification_question,
            session_id: self.session_id,
        }
    }
}
