//! Generation stage

use crate::generation::prompt::{PromptBuilder, SYSTEM_PROMPT};
use crate::pipeline::context::PipelineContext;
use crate::providers::LlmProvider;

/// Fixed apology used when the generation collaborator fails
pub const GENERATION_FAILURE_ANSWER: &str =
    "I apologize, but I encountered an error while generating the answer.";

/// Produce an answer from the retrieved passages
///
/// Assembles the context block and prompts, then invokes the
/// language-generation collaborator. On failure the stage absorbs the
/// error: the answer becomes a fixed apology, confidence is forced to
/// zero, and the failure is recorded. The stage name is recorded on
/// both outcomes and the pipeline continues to source attribution
/// regardless.
pub async fn generate(ctx: &mut PipelineContext, llm: &dyn LlmProvider) {
    let context_block = PromptBuilder::build_context(&ctx.retrieved_passages);
    let user_prompt = PromptBuilder::build_user_prompt(&ctx.question, &context_block);

    match llm.generate(SYSTEM_PROMPT, &user_prompt).await {
        Ok(answer) => {
            ctx.answer = answer;
            tracing::info!("Answer generated");
        }
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            ctx.answer = GENERATION_FAILURE_ANSWER.to_string();
            ctx.record_error(e.to_string());
            ctx.confidence = 0.0;
        }
    }

    ctx.record_step("generation");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use async_trait::async_trait;

    struct EchoLlm;

    #[async_trait]
    impl LlmProvider for EchoLlm {
        async fn generate(&self, _system: &str, user: &str) -> Result<String> {
            Ok(format!("echo: {}", user.lines().last().unwrap_or("")))
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-1"
        }
    }

    struct DownLlm;

    #[async_trait]
    impl LlmProvider for DownLlm {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String> {
            Err(Error::generation("provider quota exceeded"))
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(false)
        }

        fn name(&self) -> &str {
            "down"
        }

        fn model(&self) -> &str {
            "down-1"
        }
    }

    #[tokio::test]
    async fn test_success_sets_answer() {
        let mut ctx = PipelineContext::new("What is Docker?", None);
        ctx.confidence = 0.7;
        generate(&mut ctx, &EchoLlm).await;

        assert!(ctx.answer.starts_with("echo:"));
        assert!(ctx.error.is_none());
        assert!((ctx.confidence - 0.7).abs() < f32::EPSILON);
        assert_eq!(ctx.steps_taken, vec!["generation"]);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_apology() {
        let mut ctx = PipelineContext::new("What is Docker?", None);
        ctx.confidence = 0.7;
        generate(&mut ctx, &DownLlm).await;

        assert_eq!(ctx.answer, GENERATION_FAILURE_ANSWER);
        assert!(ctx.error.as_deref().unwrap().contains("quota"));
        assert_eq!(ctx.confidence, 0.0);
        assert_eq!(ctx.steps_taken, vec!["generation"]);
    }
}
