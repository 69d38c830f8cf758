//! Document loading from the filesystem

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ChunkingConfig;
use crate::error::{Error, Result};
use crate::providers::{DocumentChunk, DocumentStore};

use super::chunker::TextChunker;

/// Loads plain-text and markdown documents from a directory tree
pub struct DocumentLoader {
    docs_directory: PathBuf,
    chunker: TextChunker,
}

impl DocumentLoader {
    /// Create a loader rooted at `docs_directory`
    pub fn new(docs_directory: impl Into<PathBuf>, chunking: &ChunkingConfig) -> Self {
        Self {
            docs_directory: docs_directory.into(),
            chunker: TextChunker::new(chunking.chunk_size, chunking.chunk_overlap),
        }
    }

    /// Load every supported file under the root and chunk it
    pub fn load_and_chunk(&self) -> Result<Vec<DocumentChunk>> {
        if !self.docs_directory.is_dir() {
            return Err(Error::ingestion(format!(
                "Not a directory: {}",
                self.docs_directory.display()
            )));
        }

        let mut all_chunks = Vec::new();

        for entry in WalkDir::new(&self.docs_directory)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if !is_supported(path) {
                continue;
            }

            match std::fs::read_to_string(path) {
                Ok(content) => {
                    let chunks = self.chunk_file(path, &content);
                    tracing::info!(
                        file = %path.display(),
                        chunks = chunks.len(),
                        "Loaded document"
                    );
                    all_chunks.extend(chunks);
                }
                Err(e) => {
                    tracing::warn!(file = %path.display(), "Failed to read file: {}", e);
                }
            }
        }

        tracing::info!(total = all_chunks.len(), "Documents loaded and chunked");

        Ok(all_chunks)
    }

    /// Chunk one file's content, tagging each chunk with its source name
    fn chunk_file(&self, path: &Path, content: &str) -> Vec<DocumentChunk> {
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        self.chunker
            .chunk_text(content)
            .into_iter()
            .map(|text| DocumentChunk::new(text, source.clone()))
            .collect()
    }
}

/// `.txt` and `.md` files are supported; everything else is skipped
fn is_supported(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("txt") | Some("md") | Some("markdown")
    )
}

/// Load and index a directory of documents into the store
///
/// Returns the number of chunks indexed.
pub async fn ingest_directory(
    store: &dyn DocumentStore,
    docs_directory: impl Into<PathBuf>,
    chunking: &ChunkingConfig,
) -> Result<usize> {
    let loader = DocumentLoader::new(docs_directory, chunking);
    let chunks = loader.load_and_chunk()?;
    store.add_chunks(chunks).await
}

/// Built-in sample documents for demos and smoke tests
pub fn sample_documents() -> Vec<DocumentChunk> {
    vec![
        DocumentChunk::new(
            "Docker is a containerization platform that allows developers to package \
             applications with all their dependencies into standardized units called containers. \
             Containers are lightweight, portable, and ensure consistency across different environments.",
            "docker-intro.txt",
        )
        .with_page(1),
        DocumentChunk::new(
            "To deploy a Docker container, you first need to create a Dockerfile that \
             defines your application's environment. Then use 'docker build' to create an image, and \
             'docker run' to start a container from that image.",
            "docker-deployment.txt",
        )
        .with_page(1),
        DocumentChunk::new(
            "Kubernetes is an orchestration platform for managing containerized applications \
             at scale. It provides features like automatic scaling, load balancing, self-healing, and \
             rolling updates.",
            "kubernetes-intro.txt",
        )
        .with_page(1),
    ]
}
