//! All AI/LLM functionality

pub mod gemini;
pub mod types;

use async_trait::async_trait;

use crate::errors::SummarizeError;

// Re-export main types for convenience
pub use gemini::{GEMINI_MODEL, GeminiClient};

/// A text-generation backend: one prompt in, one completion out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Identifier reported in response metadata.
    fn model_name(&self) -> &str;

    /// # Errors
    ///
    /// Returns an error when the backend cannot be reached or returns no text.
    async fn generate(&self, prompt: &str) -> Result<String, SummarizeError>;
}
