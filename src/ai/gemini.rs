//! Gemini API client module
//!
//! Encapsulates the `generateContent` call used to produce summaries.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

use super::TextGenerator;
use super::types::{
    ApiErrorBody, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ResponseText,
};
use crate::errors::SummarizeError;

pub const GEMINI_MODEL: &str = "gemini-2.5-flash-lite";

const TEMPERATURE: f32 = 0.2;
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 64;
const MAX_OUTPUT_TOKENS: u32 = 1024;

#[must_use]
pub fn generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: TEMPERATURE,
        top_p: TOP_P,
        top_k: TOP_K,
        max_output_tokens: MAX_OUTPUT_TOKENS,
    }
}

/// Gemini API client for generating summaries
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug)]
pub struct GeminiClient {
    http: Client,
    api_key: SecretString,
    base_url: String,
    model_name: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(api_key: SecretString, base_url: impl Into<String>) -> Result<Self, SummarizeError> {
        let http = Client::builder()
            .build()
            .map_err(|e| SummarizeError::HttpError(format!("client setup: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model_name: GEMINI_MODEL.to_string(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        )
    }

    #[must_use]
    pub fn build_request(prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: generation_config(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn generate(&self, prompt: &str) -> Result<String, SummarizeError> {
        #[cfg(feature = "debug-logs")]
        debug!("Using Gemini prompt:\n{}", prompt);

        info!(
            model = %self.model_name,
            prompt_chars = prompt.chars().count(),
            "Requesting Gemini completion"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&Self::build_request(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            let (message, upstream_status) = match serde_json::from_str::<ApiErrorBody>(&error_text)
            {
                Ok(body) => (body.error.message.unwrap_or(error_text), body.error.status),
                Err(_) => (error_text, None),
            };
            warn!(status = status.as_u16(), "Gemini API returned an error");

            let code = status.as_u16();
            return Err(SummarizeError::GeminiError(match upstream_status {
                Some(upstream) => format!("{message} (status {code} {upstream})"),
                None => format!("{message} (status {code})"),
            }));
        }

        let body = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&body)?;

        match parsed.text() {
            ResponseText::Text(text) => {
                debug!(chars = text.chars().count(), "Gemini completion received");
                Ok(text)
            }
            ResponseText::Blocked(reason) => Err(SummarizeError::GeminiError(format!(
                "Prompt was blocked (reason: {reason})"
            ))),
            ResponseText::NoText { finish_reason } => Err(SummarizeError::GeminiError(format!(
                "Response contained no text (finish reason: {})",
                finish_reason.as_deref().unwrap_or("unknown")
            ))),
        }
    }
}
