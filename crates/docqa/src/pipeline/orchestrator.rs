//! Pipeline orchestrator: executes the stage state machine

use std::sync::Arc;

use crate::config::RetrievalConfig;
use crate::pipeline::context::PipelineContext;
use crate::pipeline::stage::{next_stage, StageId};
use crate::pipeline::stages::{analyzer, attribution, generator, relevance, retriever, terminal};
use crate::providers::{DocumentStore, LlmProvider};
use crate::types::QueryResponse;

/// Tunable pipeline parameters
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Passages requested from the document store
    pub top_k: usize,
    /// Minimum mean relevance for the generation path
    pub relevance_threshold: f32,
    /// Maximum citations attached to an answer
    pub max_sources: usize,
    /// Excerpt length for citations, in characters
    pub excerpt_chars: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from(&RetrievalConfig::default())
    }
}

impl From<&RetrievalConfig> for PipelineOptions {
    fn from(config: &RetrievalConfig) -> Self {
        Self {
            top_k: config.top_k,
            relevance_threshold: config.relevance_threshold,
            max_sources: config.max_sources,
            excerpt_chars: config.excerpt_chars,
        }
    }
}

/// The query pipeline with its injected collaborators
///
/// Constructed once at process start; collaborator handles are shared,
/// externally-synchronized resources. Each query gets its own context,
/// so concurrent `run_query` calls share no mutable state.
#[derive(Clone)]
pub struct QueryPipeline {
    store: Arc<dyn DocumentStore>,
    llm: Arc<dyn LlmProvider>,
    options: PipelineOptions,
}

impl QueryPipeline {
    /// Create a pipeline over the given collaborators
    pub fn new(
        store: Arc<dyn DocumentStore>,
        llm: Arc<dyn LlmProvider>,
        options: PipelineOptions,
    ) -> Self {
        Self { store, llm, options }
    }

    /// Document store handle (for ingestion and diagnostics)
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// LLM handle (for health checks)
    pub fn llm(&self) -> &Arc<dyn LlmProvider> {
        &self.llm
    }

    /// Answer one question
    ///
    /// The caller always receives a well-formed response: stage-level
    /// failures degrade inside their stages, and anything the stages do
    /// not absorb (including panics) is caught here and returned as a
    /// minimal degraded result.
    pub async fn run_query(
        &self,
        question: impl Into<String>,
        session_id: Option<String>,
    ) -> QueryResponse {
        let question = question.into();
        tracing::info!("Running query: \"{}\"", question);

        let pipeline = self.clone();
        let run = tokio::spawn(async move { pipeline.run_to_completion(question, session_id).await });

        match run.await {
            Ok(ctx) => {
                tracing::info!(steps = ?ctx.steps_taken, "Pipeline completed");
                ctx.into_response()
            }
            Err(e) => {
                tracing::error!("Pipeline execution failed: {}", e);
                QueryResponse::degraded(format!("Pipeline execution failed: {}", e))
            }
        }
    }

    /// Drive the state machine from analysis to a terminal stage
    async fn run_to_completion(
        &self,
        question: String,
        session_id: Option<String>,
    ) -> PipelineContext {
        let mut ctx = PipelineContext::new(question, session_id);
        let mut stage = StageId::QueryAnalysis;

        loop {
            tracing::debug!(stage = stage.name(), "Executing stage");
            self.execute_stage(stage, &mut ctx).await;

            match next_stage(stage, &ctx, self.options.relevance_threshold) {
                Some(next) => stage = next,
                None => break,
            }
        }

        ctx
    }

    /// Dispatch one stage against the context
    async fn execute_stage(&self, stage: StageId, ctx: &mut PipelineContext) {
        match stage {
            StageId::QueryAnalysis => analyzer::analyze(ctx),
            StageId::Retrieval => retriever::retrieve(ctx, self.store.as_ref(), self.options.top_k).await,
            StageId::RelevanceCheck => relevance::check_relevance(ctx),
            StageId::Generation => generator::generate(ctx, self.llm.as_ref()).await,
            StageId::SourceAttribution => {
                attribution::attribute_sources(ctx, self.options.max_sources, self.options.excerpt_chars)
            }
            StageId::Fallback => terminal::fallback(ctx),
            StageId::Clarification => terminal::clarify(ctx),
        }
    }
}
