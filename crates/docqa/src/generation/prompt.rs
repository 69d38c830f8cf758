//! Prompt templates for grounded answer generation

use crate::types::Passage;

/// Fixed system instruction constraining the model to the supplied context
pub const SYSTEM_PROMPT: &str = "You are a helpful technical documentation assistant.
Answer questions based ONLY on the provided context.
If the context doesn't contain relevant information, say so clearly.
Always cite specific sources when providing information.";

/// Prompt builder for Q&A generation
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the context block from retrieved passages
    ///
    /// Each passage is labeled `Document i (Source: <source>)` in
    /// retrieval order; passages without a recorded source get
    /// `"unknown"`. Blocks are joined by blank lines.
    pub fn build_context(passages: &[Passage]) -> String {
        passages
            .iter()
            .enumerate()
            .map(|(i, passage)| {
                format!(
                    "Document {} (Source: {}):\n{}",
                    i + 1,
                    passage.source_or_unknown(),
                    passage.content
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build the user message carrying the context block and the question
    pub fn build_user_prompt(question: &str, context: &str) -> String {
        format!(
            "Context:\n{context}\n\nQuestion: {question}\n\nAnswer the question based on the context above. Be specific and cite sources."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PassageMetadata;

    #[test]
    fn test_context_labels_and_order() {
        let passages = vec![
            Passage::new("First.", PassageMetadata::from_source("a.txt"), Some(0.9)),
            Passage::new("Second.", PassageMetadata::default(), Some(0.5)),
        ];

        let context = PromptBuilder::build_context(&passages);
        assert_eq!(
            context,
            "Document 1 (Source: a.txt):\nFirst.\n\nDocument 2 (Source: unknown):\nSecond."
        );
    }

    #[test]
    fn test_context_empty_passages() {
        assert_eq!(PromptBuilder::build_context(&[]), "");
    }

    #[test]
    fn test_user_prompt_contains_question_and_context() {
        let prompt = PromptBuilder::build_user_prompt("What is Docker?", "ctx");
        assert!(prompt.starts_with("Context:\nctx"));
        assert!(prompt.contains("Question: What is Docker?"));
        assert!(prompt.ends_with("Be specific and cite sources."));
    }
}
