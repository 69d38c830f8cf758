//! End-to-end pipeline tests with stub collaborators

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use docqa::error::{Error, Result};
use docqa::pipeline::{PipelineOptions, QueryPipeline};
use docqa::providers::document_store::{DocumentChunk, DocumentStore, ScoredChunk};
use docqa::providers::llm::LlmProvider;

/// Store that replays a fixed list of hits, or fails on demand
struct ScriptedStore {
    hits: Vec<ScoredChunk>,
    fail: bool,
}

impl ScriptedStore {
    fn with_hits(hits: Vec<ScoredChunk>) -> Self {
        Self { hits, fail: false }
    }

    fn empty() -> Self {
        Self::with_hits(Vec::new())
    }

    fn unavailable() -> Self {
        Self {
            hits: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl DocumentStore for ScriptedStore {
    async fn similarity_search(&self, _query: &str, k: usize) -> Result<Vec<ScoredChunk>> {
        if self.fail {
            return Err(Error::retrieval("document store unreachable"));
        }
        Ok(self.hits.iter().take(k).cloned().collect())
    }

    async fn add_chunks(&self, _chunks: Vec<DocumentChunk>) -> Result<usize> {
        Ok(0)
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.hits.len())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.fail)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Deterministic LLM stub
struct StubLlm {
    fail: bool,
}

impl StubLlm {
    fn ok() -> Self {
        Self { fail: false }
    }

    fn down() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl LlmProvider for StubLlm {
    async fn generate(&self, _system_prompt: &str, user_prompt: &str) -> Result<String> {
        if self.fail {
            return Err(Error::generation("provider timeout"));
        }
        // Deterministic function of the prompt
        Ok(format!("Answer derived from {} prompt chars.", user_prompt.len()))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.fail)
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-1"
    }
}

/// LLM stub that panics instead of returning
struct PanickingLlm;

#[async_trait]
impl LlmProvider for PanickingLlm {
    async fn generate(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
        panic!("collaborator blew up");
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "panicking"
    }

    fn model(&self) -> &str {
        "panicking-1"
    }
}

fn hit(content: &str, source: &str, score: f32) -> ScoredChunk {
    let mut metadata = HashMap::new();
    metadata.insert("source".to_string(), serde_json::json!(source));
    ScoredChunk {
        content: content.to_string(),
        metadata,
        score,
    }
}

fn pipeline(store: ScriptedStore, llm: StubLlm) -> QueryPipeline {
    QueryPipeline::new(
        Arc::new(store),
        Arc::new(llm),
        PipelineOptions::default(),
    )
}

#[tokio::test]
async fn vague_question_takes_clarification_path() {
    let pipeline = pipeline(ScriptedStore::empty(), StubLlm::ok());

    for question in ["Docker?", "what is", "hi"] {
        let response = pipeline.run_query(question, None).await;

        assert_eq!(response.steps_taken, vec!["query_analysis", "clarification"]);
        assert!(response.answer.is_empty());
        assert!(response.clarification_question.is_some());
        assert_eq!(response.confidence, 0.0);
    }
}

#[tokio::test]
async fn relevant_hits_take_generation_path() {
    let store = ScriptedStore::with_hits(vec![
        hit("Docker is a containerization platform.", "docker-intro.txt", 0.8),
        hit("Use docker run to start containers.", "docker-deployment.txt", 0.6),
    ]);
    let pipeline = pipeline(store, StubLlm::ok());

    let response = pipeline.run_query("What is Docker?", None).await;

    assert_eq!(
        response.steps_taken,
        vec![
            "query_analysis",
            "retrieval",
            "relevance_check",
            "generation",
            "source_attribution"
        ]
    );
    // Mean of 0.8 and 0.6 is 0.7, above the 0.3 threshold
    assert!((response.confidence - 0.7).abs() < 1e-6);
    assert_eq!(response.sources.len(), 2);
    assert_eq!(response.sources[0].relevance_score, 0.8);
    assert_eq!(response.sources[1].relevance_score, 0.6);
    assert!(!response.answer.is_empty());
    assert!(response.error.is_none());
}

#[tokio::test]
async fn empty_retrieval_takes_fallback_path() {
    let pipeline = pipeline(ScriptedStore::empty(), StubLlm::ok());

    let response = pipeline.run_query("What is quantum chromodynamics?", None).await;

    assert_eq!(
        response.steps_taken,
        vec!["query_analysis", "retrieval", "relevance_check", "fallback"]
    );
    assert_eq!(response.confidence, 0.0);
    assert!(response.sources.is_empty());
    assert!(response
        .answer
        .starts_with("I apologize, but I couldn't find relevant information"));
}

#[tokio::test]
async fn weak_hits_take_fallback_path() {
    let store = ScriptedStore::with_hits(vec![
        hit("Barely related text.", "misc.txt", 0.2),
        hit("Also barely related.", "misc2.txt", 0.1),
    ]);
    let pipeline = pipeline(store, StubLlm::ok());

    let response = pipeline.run_query("What is Docker?", None).await;

    assert_eq!(response.steps_taken.last().map(String::as_str), Some("fallback"));
    assert_eq!(response.confidence, 0.0);
    assert!(response.sources.is_empty());
}

#[tokio::test]
async fn store_failure_degrades_to_fallback() {
    let pipeline = pipeline(ScriptedStore::unavailable(), StubLlm::ok());

    let response = pipeline.run_query("What is Docker?", None).await;

    assert_eq!(
        response.steps_taken,
        vec!["query_analysis", "retrieval", "relevance_check", "fallback"]
    );
    assert!(response.error.as_deref().unwrap().contains("unreachable"));
    assert_eq!(response.confidence, 0.0);
}

#[tokio::test]
async fn generation_failure_degrades_but_still_attributes_sources() {
    let store = ScriptedStore::with_hits(vec![
        hit("Docker is a containerization platform.", "docker-intro.txt", 0.8),
        hit("Use docker run to start containers.", "docker-deployment.txt", 0.6),
    ]);
    let pipeline = pipeline(store, StubLlm::down());

    let response = pipeline.run_query("What is Docker?", None).await;

    assert_eq!(
        response.answer,
        "I apologize, but I encountered an error while generating the answer."
    );
    assert_eq!(response.confidence, 0.0);
    assert!(response.error.as_deref().unwrap().contains("timeout"));
    assert!(response.steps_taken.contains(&"generation".to_string()));
    assert!(response.steps_taken.contains(&"source_attribution".to_string()));
    assert_eq!(response.sources.len(), 2);
}

#[tokio::test]
async fn idempotent_against_unchanged_store_and_deterministic_llm() {
    let hits = vec![
        hit("Docker is a containerization platform.", "docker-intro.txt", 0.8),
        hit("Use docker run to start containers.", "docker-deployment.txt", 0.6),
    ];
    let pipeline = pipeline(ScriptedStore::with_hits(hits), StubLlm::ok());

    let first = pipeline.run_query("What is Docker?", None).await;
    let second = pipeline.run_query("What is Docker?", None).await;

    assert_eq!(first.answer, second.answer);
    assert_eq!(first.sources, second.sources);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.steps_taken, second.steps_taken);
}

#[tokio::test]
async fn confidence_clamped_for_malformed_scores() {
    let store = ScriptedStore::with_hits(vec![
        hit("Oddly scored passage.", "a.txt", 1.8),
        hit("Another oddly scored passage.", "b.txt", 1.4),
    ]);
    let pipeline = pipeline(store, StubLlm::ok());

    let response = pipeline.run_query("What is Docker?", None).await;

    assert_eq!(response.confidence, 1.0);
}

#[tokio::test]
async fn excerpt_truncation_through_the_pipeline() {
    let long_content = "d".repeat(250);
    let short_content = "s".repeat(150);
    let store = ScriptedStore::with_hits(vec![
        hit(&long_content, "long.txt", 0.9),
        hit(&short_content, "short.txt", 0.8),
    ]);
    let pipeline = pipeline(store, StubLlm::ok());

    let response = pipeline.run_query("What is Docker?", None).await;

    let long_excerpt = &response.sources[0].excerpt;
    assert_eq!(long_excerpt.chars().count(), 203);
    assert!(long_excerpt.ends_with("..."));

    let short_excerpt = &response.sources[1].excerpt;
    assert_eq!(short_excerpt, &short_content);
}

#[tokio::test]
async fn sources_capped_at_three() {
    let store = ScriptedStore::with_hits(vec![
        hit("one", "1.txt", 0.9),
        hit("two", "2.txt", 0.8),
        hit("three", "3.txt", 0.7),
        hit("four", "4.txt", 0.6),
        hit("five", "5.txt", 0.5),
    ]);
    let pipeline = pipeline(store, StubLlm::ok());

    let response = pipeline.run_query("What is Docker?", None).await;

    assert_eq!(response.sources.len(), 3);
    assert_eq!(response.sources[0].document, "1.txt");
    assert_eq!(response.sources[2].document, "3.txt");
}

#[tokio::test]
async fn panic_in_stage_degrades_to_error_response() {
    let store = ScriptedStore::with_hits(vec![hit(
        "Docker is a containerization platform.",
        "docker-intro.txt",
        0.8,
    )]);
    let pipeline = QueryPipeline::new(
        Arc::new(store),
        Arc::new(PanickingLlm),
        PipelineOptions::default(),
    );

    // The panic fires inside the generation stage; run_query must still
    // return a well-formed degraded response, never unwind
    let response = pipeline.run_query("What is Docker?", None).await;

    assert_eq!(
        response.answer,
        "An error occurred while processing your question."
    );
    assert_eq!(response.confidence, 0.0);
    assert!(response.sources.is_empty());
    assert!(response.error.is_some());
}

#[tokio::test]
async fn session_id_passes_through_unchanged() {
    let pipeline = pipeline(ScriptedStore::empty(), StubLlm::ok());

    let response = pipeline
        .run_query("What is Docker?", Some("session-42".to_string()))
        .await;

    assert_eq!(response.session_id.as_deref(), Some("session-42"));
}

#[tokio::test]
async fn concurrent_queries_do_not_share_state() {
    let store = ScriptedStore::with_hits(vec![hit(
        "Docker is a containerization platform.",
        "docker-intro.txt",
        0.8,
    )]);
    let pipeline = Arc::new(pipeline(store, StubLlm::ok()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let pipeline = Arc::clone(&pipeline);
        handles.push(tokio::spawn(async move {
            let question = if i % 2 == 0 { "What is Docker?" } else { "hi" };
            pipeline.run_query(question, None).await
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let response = handle.await.unwrap();
        if i % 2 == 0 {
            assert_eq!(response.steps_taken.last().map(String::as_str), Some("source_attribution"));
        } else {
            assert_eq!(response.steps_taken, vec!["query_analysis", "clarification"]);
        }
    }
}
