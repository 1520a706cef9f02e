//! Gemini embedding and generation backends over the REST API.
//!
//! Both clients call the `generativelanguage.googleapis.com` endpoints
//! directly with `reqwest`: [`GeminiEmbeddingProvider`] wraps
//! `embedContent`/`batchEmbedContents`, [`GeminiChatModel`] wraps
//! `generateContent`. Neither retries: a provider failure surfaces to the
//! caller as a service error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::generation::ChatModel;

/// The Gemini API base URL.
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The default embedding model.
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";

/// The default dimensionality for `text-embedding-004`.
const DEFAULT_DIMENSIONS: usize = 768;

/// The default generation model.
const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-flash";

/// Sampling temperature for near-deterministic answers.
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Read the API key from `GOOGLE_API_KEY`, falling back to `GEMINI_API_KEY`.
fn api_key_from_env() -> Option<String> {
    std::env::var("GOOGLE_API_KEY").or_else(|_| std::env::var("GEMINI_API_KEY")).ok()
}

// ── Shared request/response types ──────────────────────────────────

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Check an HTTP response status, extracting the API error message on failure.
async fn error_for_status(response: reqwest::Response) -> std::result::Result<reqwest::Response, String> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail =
        serde_json::from_str::<ErrorResponse>(&body).map(|e| e.error.message).unwrap_or(body);
    Err(format!("API returned {status}: {detail}"))
}

// ── Embedding provider ─────────────────────────────────────────────

/// An [`EmbeddingProvider`] backed by the Gemini embeddings API.
///
/// Uses `reqwest` to call `embedContent` (single) and `batchEmbedContents`
/// (batch) directly.
///
/// # Configuration
///
/// - `model` – defaults to `text-embedding-004` (768 dimensions).
/// - `api_key` – from the constructor or the `GOOGLE_API_KEY` /
///   `GEMINI_API_KEY` environment variables.
///
/// # Example
///
/// ```rust,ignore
/// use pdfchat_rag::gemini::GeminiEmbeddingProvider;
///
/// let provider = GeminiEmbeddingProvider::from_env()?;
/// let embedding = provider.embed("hello world").await?;
/// ```
pub struct GeminiEmbeddingProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    dimensions: usize,
}

impl GeminiEmbeddingProvider {
    /// Create a new provider with the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(RagError::EmbeddingError {
                provider: "Gemini".into(),
                message: "API key must not be empty".into(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_EMBEDDING_MODEL.into(),
            dimensions: DEFAULT_DIMENSIONS,
        })
    }

    /// Create a new provider from the `GOOGLE_API_KEY` or `GEMINI_API_KEY`
    /// environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = api_key_from_env().ok_or_else(|| RagError::EmbeddingError {
            provider: "Gemini".into(),
            message: "GOOGLE_API_KEY or GEMINI_API_KEY environment variable not set".into(),
        })?;
        Self::new(api_key)
    }

    /// Set the embedding model name and its output dimensionality.
    pub fn with_model(mut self, model: impl Into<String>, dimensions: usize) -> Self {
        self.model = model.into();
        self.dimensions = dimensions;
        self
    }
}

#[derive(Serialize)]
struct EmbedContentRequest {
    content: Content,
}

#[derive(Serialize)]
struct BatchEmbedRequest {
    requests: Vec<BatchEmbedEntry>,
}

#[derive(Serialize)]
struct BatchEmbedEntry {
    model: String,
    content: Content,
}

#[derive(Deserialize)]
struct EmbedContentResponse {
    embedding: ContentEmbedding,
}

#[derive(Deserialize)]
struct BatchEmbedResponse {
    embeddings: Vec<ContentEmbedding>,
}

#[derive(Deserialize)]
struct ContentEmbedding {
    values: Vec<f32>,
}

fn text_content(text: &str) -> Content {
    Content { role: None, parts: vec![Part { text: text.to_string() }] }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        debug!(provider = "Gemini", text_len = text.len(), "embedding single text");

        let url = format!("{GEMINI_BASE_URL}/models/{}:embedContent", self.model);
        let body = EmbedContentRequest { content: text_content(text) };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Gemini", error = %e, "embedding request failed");
                RagError::EmbeddingError {
                    provider: "Gemini".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        let response = error_for_status(response).await.map_err(|message| {
            error!(provider = "Gemini", %message, "API error");
            RagError::EmbeddingError { provider: "Gemini".into(), message }
        })?;

        let parsed: EmbedContentResponse = response.json().await.map_err(|e| {
            RagError::EmbeddingError {
                provider: "Gemini".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        Ok(parsed.embedding.values)
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(provider = "Gemini", batch_size = texts.len(), model = %self.model, "embedding batch");

        let url = format!("{GEMINI_BASE_URL}/models/{}:batchEmbedContents", self.model);
        let body = BatchEmbedRequest {
            requests: texts
                .iter()
                .map(|t| BatchEmbedEntry {
                    model: format!("models/{}", self.model),
                    content: text_content(t),
                })
                .collect(),
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Gemini", error = %e, "batch embedding request failed");
                RagError::EmbeddingError {
                    provider: "Gemini".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        let response = error_for_status(response).await.map_err(|message| {
            error!(provider = "Gemini", %message, "API error");
            RagError::EmbeddingError { provider: "Gemini".into(), message }
        })?;

        let parsed: BatchEmbedResponse = response.json().await.map_err(|e| {
            RagError::EmbeddingError {
                provider: "Gemini".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        Ok(parsed.embeddings.into_iter().map(|e| e.values).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

// ── Chat model ─────────────────────────────────────────────────────

/// A [`ChatModel`] backed by the Gemini `generateContent` API.
///
/// Each call is a single-turn request: no streaming, no conversation
/// memory. The temperature defaults to 0.3 for near-deterministic answers.
///
/// # Example
///
/// ```rust,ignore
/// use pdfchat_rag::gemini::GeminiChatModel;
///
/// let model = GeminiChatModel::from_env()?;
/// let answer = model.generate("Say hello.").await?;
/// ```
pub struct GeminiChatModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GeminiChatModel {
    /// Create a new chat model client with the given API key and the
    /// default model (`gemini-2.5-flash`) at temperature 0.3.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(RagError::GenerationError {
                model: DEFAULT_GENERATION_MODEL.into(),
                message: "API key must not be empty".into(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_GENERATION_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
        })
    }

    /// Create a new client from the `GOOGLE_API_KEY` or `GEMINI_API_KEY`
    /// environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = api_key_from_env().ok_or_else(|| RagError::GenerationError {
            model: DEFAULT_GENERATION_MODEL.into(),
            message: "GOOGLE_API_KEY or GEMINI_API_KEY environment variable not set".into(),
        })?;
        Self::new(api_key)
    }

    /// Set the generation model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[async_trait]
impl ChatModel for GeminiChatModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, prompt_len = prompt.len(), "generating answer");

        let url = format!("{GEMINI_BASE_URL}/models/{}:generateContent", self.model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt.to_string() }],
            }],
            generation_config: GenerationConfig { temperature: self.temperature },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(model = %self.model, error = %e, "generation request failed");
                RagError::GenerationError {
                    model: self.model.clone(),
                    message: format!("request failed: {e}"),
                }
            })?;

        let response = error_for_status(response).await.map_err(|message| {
            error!(model = %self.model, %message, "API error");
            RagError::GenerationError { model: self.model.clone(), message }
        })?;

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            RagError::GenerationError {
                model: self.model.clone(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content.parts.into_iter().map(|p| p.text).collect::<Vec<_>>().join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(RagError::GenerationError {
                model: self.model.clone(),
                message: "API returned no candidates".into(),
            });
        }

        Ok(text)
    }
}
