//! Q&A server binary
//!
//! Run with: cargo run -p docqa --bin docqa-server

use docqa::config::QaConfig;
use docqa::ingestion::sample_documents;
use docqa::server::{state::AppState, QaServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docqa=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (DOCQA_CONFIG or defaults)
    let config = QaConfig::load()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!("  - Top-k: {}", config.retrieval.top_k);
    tracing::info!("  - Relevance threshold: {}", config.retrieval.relevance_threshold);

    let state = AppState::new(config.clone())?;

    // Check the LLM endpoint
    match state.pipeline().llm().health_check().await {
        Ok(true) => tracing::info!("LLM endpoint is reachable"),
        _ => {
            tracing::warn!("LLM not available at {}", config.llm.base_url);
            tracing::warn!("Queries will degrade until it comes up. Start Ollama with:");
            tracing::warn!("  ollama serve && ollama pull {}", config.llm.model);
        }
    }

    // Seed sample documents when starting against an empty store
    if state.store().is_empty().await? {
        let seeded = state.store().add_chunks(sample_documents()).await?;
        tracing::info!("Seeded {} sample documents", seeded);
    }

    let server = QaServer::with_state(config, state);

    println!("Q&A server starting on http://{}", server.address());
    println!("  POST /api/query     - Ask questions");
    println!("  POST /api/ingest    - Index documents");
    println!("  GET  /health        - Health check");

    server.start().await?;

    Ok(())
}
