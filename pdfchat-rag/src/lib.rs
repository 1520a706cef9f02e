//! Retrieval-Augmented Generation over PDF documents.
//!
//! This crate implements the full ingest-and-ask workflow behind `pdfchat`:
//!
//! - [`extract`] — page-by-page PDF text extraction
//! - [`chunking`] — splitting extracted text into overlapping chunks
//! - [`embedding`] / [`gemini`] — embedding provider trait and the Gemini backend
//! - [`vectorstore`] / [`inmemory`] / [`persist`] — vector storage with similarity search
//! - [`pipeline`] — the orchestrator tying extraction, chunking, embedding, and storage together
//! - [`generation`] — prompt construction and answer generation via a hosted chat model
//!
//! The pipeline is built from explicitly injected components so every seam
//! (embedding provider, vector store, chunker, chat model) can be swapped —
//! including for deterministic test doubles.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pdfchat_rag::{FixedSizeChunker, PersistentVectorStore, RagConfig, RagPipeline};
//! use pdfchat_rag::gemini::GeminiEmbeddingProvider;
//!
//! let config = RagConfig::builder().top_k(3).build()?;
//! let store = Arc::new(PersistentVectorStore::open("pdfchat_db").await?);
//! let pipeline = RagPipeline::builder()
//!     .config(config)
//!     .embedding_provider(Arc::new(GeminiEmbeddingProvider::from_env()?))
//!     .vector_store(store)
//!     .chunker(Arc::new(FixedSizeChunker::new(10_000, 1_000)))
//!     .build()?;
//!
//! pipeline.ingest_files(&pdfs).await?;
//! let results = pipeline.query("What is the capital of France?").await?;
//! ```

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod gemini;
pub mod generation;
pub mod inmemory;
pub mod persist;
pub mod pipeline;
pub mod vectorstore;

pub use chunking::{Chunker, FixedSizeChunker};
pub use config::{RagConfig, RagConfigBuilder};
pub use document::{Chunk, Document, SearchResult, UPLOADED_PDF_SOURCE};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use extract::{UploadedPdf, extract_text};
pub use gemini::{GeminiChatModel, GeminiEmbeddingProvider};
pub use generation::{AnswerGenerator, ChatModel, REFUSAL_ANSWER};
pub use inmemory::InMemoryVectorStore;
pub use persist::PersistentVectorStore;
pub use pipeline::{RagPipeline, RagPipelineBuilder};
pub use vectorstore::VectorStore;
