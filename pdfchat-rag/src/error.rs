//! Error types for the `pdfchat-rag` crate.

use thiserror::Error;

/// Errors that can occur in the ingest-and-ask workflow.
#[derive(Debug, Error)]
pub enum RagError {
    /// An uploaded document could not be parsed or its text extracted.
    ///
    /// Raised for the whole ingestion batch: one unreadable file aborts
    /// the batch rather than being silently skipped.
    #[error("Document unreadable ({name}): {message}")]
    DocumentUnreadable {
        /// The file name of the unreadable document.
        name: String,
        /// A description of the failure.
        message: String,
    },

    /// An error occurred during embedding generation.
    #[error("Embedding error ({provider}): {message}")]
    EmbeddingError {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// An error occurred while generating an answer with the chat model.
    #[error("Generation error ({model}): {message}")]
    GenerationError {
        /// The chat model that produced the error.
        model: String,
        /// A description of the failure.
        message: String,
    },

    /// An error occurred in the vector store backend.
    #[error("Vector store error ({backend}): {message}")]
    VectorStoreError {
        /// The vector store backend that produced the error.
        backend: String,
        /// A description of the failure.
        message: String,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An error in the pipeline orchestration.
    #[error("Pipeline error: {0}")]
    PipelineError(String),
}

/// A convenience result type for RAG operations.
pub type Result<T> = std::result::Result<T, RagError>;
