//! Application state for the Q&A server

use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::QaConfig;
use crate::error::Result;
use crate::pipeline::{PipelineOptions, QueryPipeline};
use crate::providers::{DocumentStore, LlmProvider, MemoryStore, OllamaGenerator};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: QaConfig,
    /// The query pipeline with its injected collaborators
    pipeline: QueryPipeline,
    /// Document store handle (shared with the pipeline)
    store: Arc<dyn DocumentStore>,
    /// Ready state
    ready: RwLock<bool>,
}

impl AppState {
    /// Create application state with the default collaborators
    pub fn new(config: QaConfig) -> Result<Self> {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let llm: Arc<dyn LlmProvider> = Arc::new(OllamaGenerator::new(&config.llm)?);
        Self::with_collaborators(config, store, llm)
    }

    /// Create application state over explicit collaborator handles
    pub fn with_collaborators(
        config: QaConfig,
        store: Arc<dyn DocumentStore>,
        llm: Arc<dyn LlmProvider>,
    ) -> Result<Self> {
        tracing::info!(
            store = store.name(),
            llm = llm.name(),
            model = llm.model(),
            "Initializing application state"
        );

        let pipeline = QueryPipeline::new(
            Arc::clone(&store),
            llm,
            PipelineOptions::from(&config.retrieval),
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pipeline,
                store,
                ready: RwLock::new(true),
            }),
        })
    }

    /// The query pipeline
    pub fn pipeline(&self) -> &QueryPipeline {
        &self.inner.pipeline
    }

    /// The document store (write path)
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.inner.store
    }

    /// Configuration
    pub fn config(&self) -> &QaConfig {
        &self.inner.config
    }

    /// Whether the server is ready to serve queries
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Update the ready state
    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }
}
