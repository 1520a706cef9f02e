//! Answer generation from retrieved context.
//!
//! The [`AnswerGenerator`] renders a fixed prompt template — a `Context`
//! section holding the retrieved chunk texts and a `Question` section
//! holding the user query — and sends it to a [`ChatModel`]. The template
//! instructs the model to answer only from the context and to emit the
//! literal [`REFUSAL_ANSWER`] when the context does not contain the answer.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::document::SearchResult;
use crate::error::Result;

/// The fixed refusal sentinel the model is instructed to return instead of
/// fabricating an answer.
pub const REFUSAL_ANSWER: &str = "answer is not available in the context";

/// A hosted chat-completion model: prompt in, generated text out.
///
/// One call per query; no streaming and no multi-turn memory.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Generates answers for a query from retrieved context chunks.
pub struct AnswerGenerator {
    model: Arc<dyn ChatModel>,
}

impl AnswerGenerator {
    /// Create a generator backed by the given chat model.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Build the prompt for a query and its retrieved context chunks.
    ///
    /// Chunk texts are concatenated under the `Context` section in retrieval
    /// order, separated by blank lines.
    pub fn build_prompt(question: &str, results: &[SearchResult]) -> String {
        let context =
            results.iter().map(|r| r.chunk.text.as_str()).collect::<Vec<_>>().join("\n\n");

        format!(
            "Give me a detailed answer from the provided context and make sure to provide \
             all the necessary details.\n\
             Read the question and understand it carefully and search the documents to find \
             the correct context.\n\
             If the answer is not in the provided context, just say, \"{REFUSAL_ANSWER}\", \
             don't provide the wrong answer.\n\
             \n\
             Context:\n{context}\n\
             \n\
             Question:\n{question}\n\
             \n\
             Answer:\n"
        )
    }

    /// Answer a question from the retrieved context, returning the model
    /// output verbatim.
    ///
    /// An empty context set short-circuits to [`REFUSAL_ANSWER`] without a
    /// model call — a query against an empty collection must not fail.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::GenerationError`](crate::RagError::GenerationError)
    /// if the chat model request fails.
    pub async fn answer(&self, question: &str, results: &[SearchResult]) -> Result<String> {
        if results.is_empty() {
            info!("no context retrieved, returning refusal answer");
            return Ok(REFUSAL_ANSWER.to_string());
        }

        let prompt = Self::build_prompt(question, results);
        debug!(context_chunks = results.len(), prompt_len = prompt.len(), "sending prompt");

        self.model.generate(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::document::Chunk;

    fn result_with_text(text: &str) -> SearchResult {
        SearchResult {
            chunk: Chunk {
                id: "doc_0".into(),
                text: text.into(),
                embedding: Vec::new(),
                metadata: HashMap::new(),
                document_id: "doc".into(),
            },
            score: 1.0,
        }
    }

    #[test]
    fn prompt_contains_sections_and_context() {
        let results =
            vec![result_with_text("The capital of France is Paris."), result_with_text("Second.")];
        let prompt = AnswerGenerator::build_prompt("What is the capital of France?", &results);

        assert!(prompt.contains("Context:"));
        assert!(prompt.contains("Question:"));
        assert!(prompt.contains("Answer:"));
        assert!(prompt.contains("The capital of France is Paris."));
        assert!(prompt.contains("Second."));
        assert!(prompt.contains("What is the capital of France?"));
        assert!(prompt.contains(REFUSAL_ANSWER));
    }

    #[test]
    fn context_chunks_joined_in_order() {
        let results = vec![result_with_text("first"), result_with_text("second")];
        let prompt = AnswerGenerator::build_prompt("q", &results);
        let first = prompt.find("first").unwrap();
        let second = prompt.find("second").unwrap();
        assert!(first < second);
    }
}
