//! Data types for documents, chunks, and search results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata `source` value for text extracted from an uploaded PDF batch.
pub const UPLOADED_PDF_SOURCE: &str = "uploaded_pdf";

/// A source document containing text content and metadata.
///
/// Each ingestion batch produces a document with a fresh UUID, so ingesting
/// the same file twice stores two independent sets of chunks — duplicates
/// are deliberately preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document.
    pub id: String,
    /// The text content of the document.
    pub text: String,
    /// Key-value metadata associated with the document.
    pub metadata: HashMap<String, String>,
    /// Optional URI pointing to the original source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
}

impl Document {
    /// Create a document with a fresh UUID and the `uploaded_pdf` source tag.
    pub fn from_uploaded_text(text: impl Into<String>) -> Self {
        let metadata =
            HashMap::from([("source".to_string(), UPLOADED_PDF_SOURCE.to_string())]);
        Self { id: uuid::Uuid::new_v4().to_string(), text: text.into(), metadata, source_uri: None }
    }
}

/// A segment of a [`Document`] with its vector embedding.
///
/// Chunks are immutable once created; ingestion is append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Unique identifier for the chunk (`{document_id}_{chunk_index}`).
    pub id: String,
    /// The text content of the chunk.
    pub text: String,
    /// The vector embedding for this chunk's text.
    pub embedding: Vec<f32>,
    /// Key-value metadata inherited from the parent document plus chunk-specific fields.
    pub metadata: HashMap<String, String>,
    /// The ID of the parent [`Document`].
    pub document_id: String,
}

/// A retrieved [`Chunk`] paired with a relevance score.
///
/// When multiple chunks are equidistant from the query, their relative
/// order is unspecified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// The similarity score (higher is more relevant).
    pub score: f32,
}
