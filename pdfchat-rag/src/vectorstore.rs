//! Vector store trait for storing and searching vector embeddings.

use async_trait::async_trait;

use crate::document::{Chunk, SearchResult};
use crate::error::Result;

/// A storage backend for vector embeddings with similarity search.
///
/// Implementations manage named collections of [`Chunk`]s and support
/// upserting, listing, and searching by vector similarity. Ingestion is
/// append-only: the store never deduplicates chunks with distinct IDs.
///
/// # Example
///
/// ```rust,ignore
/// use pdfchat_rag::{VectorStore, PersistentVectorStore};
///
/// let store = PersistentVectorStore::open("pdfchat_db").await?;
/// store.create_collection("pdf_collection", 768).await?;
/// store.upsert("pdf_collection", &chunks).await?;
/// let results = store.search("pdf_collection", &query_embedding, 3).await?;
/// ```
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Create a named collection. No-op if it already exists.
    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()>;

    /// Delete a named collection and all its data. Irreversible; a
    /// subsequent [`upsert`](VectorStore::upsert) after
    /// [`create_collection`](VectorStore::create_collection) starts fresh.
    async fn delete_collection(&self, name: &str) -> Result<()>;

    /// Upsert chunks into a collection. Chunks must have embeddings set.
    async fn upsert(&self, collection: &str, chunks: &[Chunk]) -> Result<()>;

    /// Return every stored chunk in a collection, in unspecified order.
    ///
    /// Returns an empty `Vec` if the collection does not exist.
    async fn list(&self, collection: &str) -> Result<Vec<Chunk>>;

    /// Search for the `top_k` most similar chunks to the given embedding.
    ///
    /// Returns results ordered by descending similarity score; the relative
    /// order of equal scores is unspecified. Returns an empty `Vec` if the
    /// collection does not exist or is empty.
    async fn search(
        &self,
        collection: &str,
        embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>>;
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Score every chunk against the query embedding, sort descending, truncate.
pub(crate) fn rank_chunks<'a>(
    chunks: impl Iterator<Item = &'a Chunk>,
    embedding: &[f32],
    top_k: usize,
) -> Vec<SearchResult> {
    let mut scored: Vec<SearchResult> = chunks
        .map(|chunk| {
            let score = cosine_similarity(&chunk.embedding, embedding);
            SearchResult { chunk: chunk.clone(), score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_k);
    scored
}
