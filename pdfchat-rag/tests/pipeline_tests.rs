//! Pipeline tests over in-memory components with a deterministic
//! embedding provider: ingestion no-ops, duplicate behavior, and
//! retrieval bounds.

mod common;

use std::sync::Arc;

use common::MockEmbeddingProvider;
use pdfchat_rag::{
    Document, FixedSizeChunker, InMemoryVectorStore, RagConfig, RagPipeline, UPLOADED_PDF_SOURCE,
};

fn pipeline(chunk_size: usize, chunk_overlap: usize, top_k: usize) -> RagPipeline {
    let config = RagConfig::builder()
        .chunk_size(chunk_size)
        .chunk_overlap(chunk_overlap)
        .top_k(top_k)
        .build()
        .unwrap();

    RagPipeline::builder()
        .config(config)
        .embedding_provider(Arc::new(MockEmbeddingProvider::new(64)))
        .vector_store(Arc::new(InMemoryVectorStore::new()))
        .chunker(Arc::new(FixedSizeChunker::new(chunk_size, chunk_overlap)))
        .build()
        .unwrap()
}

#[tokio::test]
async fn ingesting_zero_files_is_a_noop() {
    let pipeline = pipeline(200, 50, 3);

    let chunks = pipeline.ingest_files(&[]).await.unwrap();
    assert!(chunks.is_empty());
    assert!(pipeline.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn ingested_chunks_carry_the_upload_source_tag() {
    let pipeline = pipeline(200, 50, 3);

    let document = Document::from_uploaded_text("The capital of France is Paris.");
    let chunks = pipeline.ingest(&document).await.unwrap();

    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert_eq!(chunk.metadata.get("source").map(String::as_str), Some(UPLOADED_PDF_SOURCE));
        assert!(!chunk.embedding.is_empty());
    }
}

#[tokio::test]
async fn duplicate_ingestion_doubles_the_stored_chunks() {
    let pipeline = pipeline(200, 50, 3);
    let text = "The capital of France is Paris.";

    pipeline.ingest(&Document::from_uploaded_text(text)).await.unwrap();
    let after_first = pipeline.list_all().await.unwrap().len();

    pipeline.ingest(&Document::from_uploaded_text(text)).await.unwrap();
    let after_second = pipeline.list_all().await.unwrap().len();

    assert!(after_first > 0);
    assert_eq!(after_second, after_first * 2);
}

#[tokio::test]
async fn query_returns_at_most_top_k_results() {
    // Small chunks so one document yields well over top_k chunks.
    let pipeline = pipeline(20, 5, 3);
    let text = "abcdefghij".repeat(30);

    pipeline.ingest(&Document::from_uploaded_text(text)).await.unwrap();
    assert!(pipeline.list_all().await.unwrap().len() > 3);

    let results = pipeline.query("abcdefghij").await.unwrap();
    assert!(results.len() <= 3);
    assert!(!results.is_empty());
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[tokio::test]
async fn query_against_empty_collection_returns_no_results() {
    let pipeline = pipeline(200, 50, 3);

    let results = pipeline.query("anything at all").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn delete_then_list_returns_empty() {
    let pipeline = pipeline(200, 50, 3);

    pipeline.ingest(&Document::from_uploaded_text("some text to store")).await.unwrap();
    assert!(!pipeline.list_all().await.unwrap().is_empty());

    pipeline.delete_collection().await.unwrap();
    assert!(pipeline.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn ingest_after_delete_recreates_the_collection() {
    let pipeline = pipeline(200, 50, 3);

    pipeline.ingest(&Document::from_uploaded_text("first generation")).await.unwrap();
    pipeline.delete_collection().await.unwrap();
    pipeline.ingest(&Document::from_uploaded_text("second generation")).await.unwrap();

    let chunks = pipeline.list_all().await.unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "second generation");
}
