//! RAG pipeline orchestrator.
//!
//! The [`RagPipeline`] coordinates the ingest-and-query workflow against
//! the single configured collection by composing an [`EmbeddingProvider`],
//! a [`VectorStore`], and a [`Chunker`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pdfchat_rag::{RagPipeline, RagConfig, InMemoryVectorStore, FixedSizeChunker};
//!
//! let pipeline = RagPipeline::builder()
//!     .config(RagConfig::default())
//!     .embedding_provider(Arc::new(my_embedder))
//!     .vector_store(Arc::new(InMemoryVectorStore::new()))
//!     .chunker(Arc::new(FixedSizeChunker::new(10_000, 1_000)))
//!     .build()?;
//!
//! pipeline.ingest_files(&pdfs).await?;
//! let results = pipeline.query("search query").await?;
//! ```

use std::sync::Arc;

use tracing::{error, info};

use crate::chunking::Chunker;
use crate::config::RagConfig;
use crate::document::{Chunk, Document, SearchResult};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::extract::{UploadedPdf, extract_text};
use crate::vectorstore::VectorStore;

/// The RAG pipeline orchestrator.
///
/// Coordinates document ingestion (extract → chunk → embed → store) and
/// query execution (embed → search). The collection is created lazily on
/// first ingest and recreated after a delete. Construct one via
/// [`RagPipeline::builder()`].
pub struct RagPipeline {
    config: RagConfig,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
    chunker: Arc<dyn Chunker>,
}

impl RagPipeline {
    /// Create a new [`RagPipelineBuilder`].
    pub fn builder() -> RagPipelineBuilder {
        RagPipelineBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Ingest a batch of uploaded PDF files: extract → chunk → embed → store.
    ///
    /// The batch is extracted into one concatenated string which becomes a
    /// single [`Document`] with a fresh UUID, so ingesting the same files
    /// again appends duplicate entries rather than replacing them.
    ///
    /// Returns the chunks that were stored (with embeddings attached). A
    /// batch that yields no text produces zero chunks and leaves the store
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::DocumentUnreadable`] if any file in the batch
    /// cannot be extracted (the whole batch is aborted), or
    /// [`RagError::PipelineError`] if embedding or storage fails.
    pub async fn ingest_files(&self, pdfs: &[UploadedPdf]) -> Result<Vec<Chunk>> {
        let text = extract_text(pdfs)?;
        let document = Document::from_uploaded_text(text);
        self.ingest(&document).await
    }

    /// Ingest a single document: chunk → embed → store.
    ///
    /// Returns the chunks that were stored (with embeddings attached).
    ///
    /// # Errors
    ///
    /// Returns [`RagError::PipelineError`] if embedding or storage fails,
    /// including the document ID in the error message.
    pub async fn ingest(&self, document: &Document) -> Result<Vec<Chunk>> {
        // 1. Chunk the document
        let mut chunks = self.chunker.chunk(document);
        if chunks.is_empty() {
            info!(document.id = %document.id, chunk_count = 0, "ingested document (empty)");
            return Ok(chunks);
        }

        // 2. Collect chunk texts for batch embedding
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();

        // 3. Generate embeddings
        let embeddings = self.embedding_provider.embed_batch(&texts).await.map_err(|e| {
            error!(document.id = %document.id, error = %e, "embedding failed during ingestion");
            RagError::PipelineError(format!("embedding failed for document '{}': {e}", document.id))
        })?;

        // 4. Attach embeddings to chunks
        for (chunk, embedding) in chunks.iter_mut().zip(embeddings) {
            chunk.embedding = embedding;
        }

        // 5. Ensure the collection exists, then upsert
        let collection = &self.config.collection;
        self.vector_store
            .create_collection(collection, self.embedding_provider.dimensions())
            .await
            .map_err(|e| {
                error!(collection, error = %e, "failed to create collection");
                RagError::PipelineError(format!("failed to create collection '{collection}': {e}"))
            })?;

        self.vector_store.upsert(collection, &chunks).await.map_err(|e| {
            error!(document.id = %document.id, error = %e, "upsert failed during ingestion");
            RagError::PipelineError(format!("upsert failed for document '{}': {e}", document.id))
        })?;

        let chunk_count = chunks.len();
        info!(document.id = %document.id, chunk_count, "ingested document");

        Ok(chunks)
    }

    /// Query the pipeline: embed the query, then search the collection.
    ///
    /// Returns at most `top_k` results ordered by descending relevance
    /// score. An empty or missing collection yields an empty result set.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::PipelineError`] if embedding or search fails.
    pub async fn query(&self, query: &str) -> Result<Vec<SearchResult>> {
        // 1. Embed the query
        let query_embedding = self.embedding_provider.embed(query).await.map_err(|e| {
            error!(error = %e, "embedding failed during query");
            RagError::PipelineError(format!("query embedding failed: {e}"))
        })?;

        // 2. Search the vector store
        let collection = &self.config.collection;
        let results = self
            .vector_store
            .search(collection, &query_embedding, self.config.top_k)
            .await
            .map_err(|e| {
                error!(collection, error = %e, "vector store search failed");
                RagError::PipelineError(format!("search failed in collection '{collection}': {e}"))
            })?;

        info!(result_count = results.len(), "query completed");

        Ok(results)
    }

    /// Return every stored chunk for inspection, in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::PipelineError`] if the vector store operation fails.
    pub async fn list_all(&self) -> Result<Vec<Chunk>> {
        let collection = &self.config.collection;
        self.vector_store.list(collection).await.map_err(|e| {
            error!(collection, error = %e, "failed to list collection");
            RagError::PipelineError(format!("failed to list collection '{collection}': {e}"))
        })
    }

    /// Delete the configured collection and all its chunks.
    ///
    /// Irreversible; the next ingest recreates the collection from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::PipelineError`] if the vector store operation fails.
    pub async fn delete_collection(&self) -> Result<()> {
        let collection = &self.config.collection;
        self.vector_store.delete_collection(collection).await.map_err(|e| {
            error!(collection, error = %e, "failed to delete collection");
            RagError::PipelineError(format!("failed to delete collection '{collection}': {e}"))
        })
    }
}

/// Builder for constructing a [`RagPipeline`].
///
/// All fields are required. Call [`build()`](RagPipelineBuilder::build)
/// to validate and produce the pipeline.
#[derive(Default)]
pub struct RagPipelineBuilder {
    config: Option<RagConfig>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    vector_store: Option<Arc<dyn VectorStore>>,
    chunker: Option<Arc<dyn Chunker>>,
}

impl RagPipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding provider.
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Set the vector store backend.
    pub fn vector_store(mut self, store: Arc<dyn VectorStore>) -> Self {
        self.vector_store = Some(store);
        self
    }

    /// Set the document chunker.
    pub fn chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = Some(chunker);
        self
    }

    /// Build the [`RagPipeline`], validating that all required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::ConfigError`] if any required field is missing.
    pub fn build(self) -> Result<RagPipeline> {
        let config =
            self.config.ok_or_else(|| RagError::ConfigError("config is required".to_string()))?;
        let embedding_provider = self
            .embedding_provider
            .ok_or_else(|| RagError::ConfigError("embedding_provider is required".to_string()))?;
        let vector_store = self
            .vector_store
            .ok_or_else(|| RagError::ConfigError("vector_store is required".to_string()))?;
        let chunker =
            self.chunker.ok_or_else(|| RagError::ConfigError("chunker is required".to_string()))?;

        Ok(RagPipeline { config, embedding_provider, vector_store, chunker })
    }
}
