//! End-to-end ask scenarios: retrieval feeding the answer generator,
//! with a scripted chat model honoring the prompt-template contract.

mod common;

use std::sync::Arc;

use common::{MockEmbeddingProvider, ScriptedChatModel};
use pdfchat_rag::{
    AnswerGenerator, Document, FixedSizeChunker, InMemoryVectorStore, REFUSAL_ANSWER, RagConfig,
    RagPipeline,
};

fn pipeline() -> RagPipeline {
    RagPipeline::builder()
        .config(RagConfig::builder().chunk_size(200).chunk_overlap(50).top_k(3).build().unwrap())
        .embedding_provider(Arc::new(MockEmbeddingProvider::new(64)))
        .vector_store(Arc::new(InMemoryVectorStore::new()))
        .chunker(Arc::new(FixedSizeChunker::new(200, 50)))
        .build()
        .unwrap()
}

#[tokio::test]
async fn answer_from_ingested_document_contains_the_fact() {
    let pipeline = pipeline();
    let generator = AnswerGenerator::new(Arc::new(ScriptedChatModel::answering_about("Paris")));

    pipeline
        .ingest(&Document::from_uploaded_text("The capital of France is Paris."))
        .await
        .unwrap();

    let results = pipeline.query("What is the capital of France?").await.unwrap();
    assert!(!results.is_empty());

    let answer = generator.answer("What is the capital of France?", &results).await.unwrap();
    assert!(answer.contains("Paris"));
}

#[tokio::test]
async fn empty_collection_yields_the_refusal_answer() {
    let pipeline = pipeline();
    let generator = AnswerGenerator::new(Arc::new(ScriptedChatModel::answering_about("Paris")));

    let results = pipeline.query("What is the capital of France?").await.unwrap();
    assert!(results.is_empty());

    let answer = generator.answer("What is the capital of France?", &results).await.unwrap();
    assert_eq!(answer, REFUSAL_ANSWER);
}

#[tokio::test]
async fn context_without_the_answer_yields_the_refusal_answer() {
    let pipeline = pipeline();
    let generator = AnswerGenerator::new(Arc::new(ScriptedChatModel::answering_about("Paris")));

    pipeline
        .ingest(&Document::from_uploaded_text("Rust is a systems programming language."))
        .await
        .unwrap();

    let results = pipeline.query("What is the capital of France?").await.unwrap();
    assert!(!results.is_empty());

    let answer = generator.answer("What is the capital of France?", &results).await.unwrap();
    assert_eq!(answer, REFUSAL_ANSWER);
}
