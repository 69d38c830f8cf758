//! API routes for the Q&A server

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ingestion;
use crate::server::state::AppState;
use crate::types::{QueryRequest, QueryResponse};

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/query", post(query))
        .route("/ingest", post(ingest))
        .route("/documents/count", get(document_count))
        .route("/info", get(info))
}

/// POST /api/query - answer a question over the indexed corpus
///
/// Always returns a well-formed response; pipeline-internal failures
/// degrade into the response body rather than an HTTP error.
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryResponse> {
    let response = state
        .pipeline()
        .run_query(request.question, request.session_id)
        .await;

    Json(response)
}

/// Ingest request body
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    /// Directory to load documents from
    pub directory: String,
}

/// Ingest response body
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    /// Number of chunks indexed
    pub chunks_indexed: usize,
}

/// POST /api/ingest - load and index a directory of documents
pub async fn ingest(
    State(state): State<AppState>,
    Json(request): Json<IngestRequest>,
) -> Result<Json<IngestResponse>> {
    let chunks_indexed = ingestion::ingest_directory(
        state.store().as_ref(),
        &request.directory,
        &state.config().chunking,
    )
    .await?;

    Ok(Json(IngestResponse { chunks_indexed }))
}

/// GET /api/documents/count - number of indexed chunks
pub async fn document_count(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let count = state.store().len().await?;
    Ok(Json(serde_json::json!({ "chunks": count })))
}

/// GET /api/info - API summary
pub async fn info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "docqa",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Document Q&A with retrieval, relevance gating, and cited answers",
        "endpoints": {
            "POST /api/query": "Ask a question",
            "POST /api/ingest": "Load and index a directory of documents",
            "GET /api/documents/count": "Number of indexed chunks",
        }
    }))
}
