//! Shared test doubles: a deterministic hash-based embedding provider and
//! a scripted chat model that follows the prompt-template contract.

#![allow(dead_code)]

use async_trait::async_trait;

use pdfchat_rag::generation::{ChatModel, REFUSAL_ANSWER};
use pdfchat_rag::{EmbeddingProvider, Result};

/// Deterministic embedding provider: hashes the text bytes into a
/// normalized vector whose direction depends on the content. Identical
/// text always embeds identically, so similarity search is reproducible
/// without any API key.
pub struct MockEmbeddingProvider {
    dimensions: usize,
}

impl MockEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let hash = text.bytes().fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
        let mut emb = vec![0.0f32; self.dimensions];
        for (i, v) in emb.iter_mut().enumerate() {
            *v = ((hash.wrapping_add(i as u64)) as f32).sin();
        }
        let norm: f32 = emb.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            emb.iter_mut().for_each(|x| *x /= norm);
        }
        Ok(emb)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Scripted chat model honoring the prompt contract: if the context
/// section contains the configured `fact`, answer with it; otherwise
/// return the refusal sentinel, exactly as the template instructs.
pub struct ScriptedChatModel {
    fact: String,
}

impl ScriptedChatModel {
    pub fn answering_about(fact: impl Into<String>) -> Self {
        Self { fact: fact.into() }
    }
}

#[async_trait]
impl ChatModel for ScriptedChatModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let context = prompt
            .split("Context:")
            .nth(1)
            .and_then(|rest| rest.split("Question:").next())
            .unwrap_or("");
        if context.contains(&self.fact) {
            Ok(format!("The answer is {}.", self.fact))
        } else {
            Ok(REFUSAL_ANSWER.to_string())
        }
    }
}
