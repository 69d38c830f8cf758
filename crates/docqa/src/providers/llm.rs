//! Language-generation service trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM-based answer generation
///
/// Implementations:
/// - `OllamaGenerator`: local Ollama server (llama3.2, phi3, etc.)
///
/// Model identifier and temperature are fixed by the implementation's
/// configuration; the pipeline supplies only the prompts.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate free text from a system instruction and a user message
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model identifier being used
    fn model(&self) -> &str;
}
