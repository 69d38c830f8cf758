//! Retrieval stage

use crate::pipeline::context::PipelineContext;
use crate::providers::DocumentStore;
use crate::types::{Passage, PassageMetadata};

/// Fetch candidate passages for the question
///
/// Requests the top `k` matches and maps each hit into a `Passage`,
/// lifting the known metadata keys at this boundary. A store failure is
/// absorbed: the passage list is left empty and the failure message is
/// recorded into the context so the pipeline can continue degraded.
/// The stage name is recorded on both outcomes.
pub async fn retrieve(ctx: &mut PipelineContext, store: &dyn DocumentStore, k: usize) {
    match store.similarity_search(&ctx.question, k).await {
        Ok(hits) => {
            ctx.retrieved_passages = hits
                .into_iter()
                .map(|hit| {
                    Passage::new(
                        hit.content,
                        PassageMetadata::from_map(hit.metadata),
                        Some(hit.score),
                    )
                })
                .collect();
            tracing::info!(count = ctx.retrieved_passages.len(), "Passages retrieved");
        }
        Err(e) => {
            tracing::error!("Retrieval failed: {}", e);
            ctx.retrieved_passages = Vec::new();
            ctx.record_error(e.to_string());
        }
    }

    ctx.record_step("retrieval");
}
