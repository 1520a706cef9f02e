//! `pdfchat` — chat with PDF documents over retrieval-augmented generation.
//!
//! Wires the pipeline components together (explicit dependency injection:
//! the store is opened once at startup and handed to everything that needs
//! it) and runs the interactive shell.

mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdfchat_rag::{
    AnswerGenerator, FixedSizeChunker, GeminiChatModel, GeminiEmbeddingProvider,
    PersistentVectorStore, RagConfig, RagPipeline,
};

use crate::shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "pdfchat", version, about = "Chat with PDF documents using Gemini and a local vector store")]
struct Cli {
    /// Directory holding the persistent vector index.
    #[arg(long, default_value = "pdfchat_db")]
    data_dir: PathBuf,

    /// Vector collection name.
    #[arg(long, default_value = "pdf_collection")]
    collection: String,

    /// Maximum chunk size in characters.
    #[arg(long, default_value_t = 10_000)]
    chunk_size: usize,

    /// Overlap between consecutive chunks in characters.
    #[arg(long, default_value_t = 1_000)]
    chunk_overlap: usize,

    /// Number of chunks retrieved per question.
    #[arg(long, default_value_t = 3)]
    top_k: usize,

    /// Generation model name.
    #[arg(long, default_value = "gemini-2.5-flash")]
    model: String,

    /// Embedding model name.
    #[arg(long, default_value = "text-embedding-004")]
    embedding_model: String,

    /// Embedding output dimensionality.
    #[arg(long, default_value_t = 768)]
    embedding_dimensions: usize,

    /// Sampling temperature for answer generation.
    #[arg(long, default_value_t = 0.3)]
    temperature: f32,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    let api_key = std::env::var("GOOGLE_API_KEY")
        .or_else(|_| std::env::var("GEMINI_API_KEY"))
        .context("GOOGLE_API_KEY or GEMINI_API_KEY must be set (a .env file is honored)")?;

    let config = RagConfig::builder()
        .chunk_size(cli.chunk_size)
        .chunk_overlap(cli.chunk_overlap)
        .top_k(cli.top_k)
        .collection(&cli.collection)
        .build()?;

    let embedding_provider = GeminiEmbeddingProvider::new(&api_key)?
        .with_model(&cli.embedding_model, cli.embedding_dimensions);
    let store = PersistentVectorStore::open(&cli.data_dir).await?;

    let pipeline = Arc::new(
        RagPipeline::builder()
            .config(config)
            .embedding_provider(Arc::new(embedding_provider))
            .vector_store(Arc::new(store))
            .chunker(Arc::new(FixedSizeChunker::new(cli.chunk_size, cli.chunk_overlap)))
            .build()?,
    );

    let chat_model = GeminiChatModel::new(&api_key)?
        .with_model(&cli.model)
        .with_temperature(cli.temperature);
    let generator = AnswerGenerator::new(Arc::new(chat_model));

    Shell::new(pipeline, generator).run().await
}
