//! Response types for Q&A queries

use serde::{Deserialize, Serialize};

use super::passage::SourceCitation;

/// Final result of one pipeline run
///
/// The caller always receives a well-formed response; failures inside
/// the pipeline degrade into `answer`/`error` rather than surfacing as
/// transport errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Generated answer (empty when clarification was requested)
    pub answer: String,
    /// Citations for the answer, in retrieval order
    pub sources: Vec<SourceCitation>,
    /// Aggregate confidence in [0, 1]
    pub confidence: f32,
    /// Names of the stages executed, in order
    pub steps_taken: Vec<String>,
    /// First failure encountered, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Prompt back to the user when the question was too vague
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarification_question: Option<String>,
    /// Session correlation token, echoed back unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl QueryResponse {
    /// Minimal degraded response for failures the stages did not absorb
    pub fn degraded(error: impl Into<String>) -> Self {
        Self {
            answer: "An error occurred while processing your question.".to_string(),
            sources: Vec::new(),
            confidence: 0.0,
            steps_taken: Vec::new(),
            error: Some(error.into()),
            clarification_question: None,
            session_id: None,
        }
    }
}
