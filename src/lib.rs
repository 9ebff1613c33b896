//! Gemini Summarizer - an HTTP service that summarizes text with Gemini.
//!
//! A single `POST /summarize` endpoint accepts JSON (`{"text": ...}`) or plain
//! text, normalizes it, builds a style- and length-aware prompt and returns the
//! model's summary with metadata.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP surface
//! - reqwest for the Gemini `generateContent` call
//! - regex for input normalization
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use gemini_summarizer::ai::GeminiClient;
//! use gemini_summarizer::api::{AppState, router};
//! use gemini_summarizer::core::config::{AppConfig, MockSwitch};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     gemini_summarizer::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let addr = config.bind_addr();
//!     let max_body_bytes = config.max_body_bytes;
//!     let client = GeminiClient::new(config.gemini_api_key, config.gemini_api_base)?;
//!
//!     let app = router(AppState::new(Arc::new(client), MockSwitch::Env), max_body_bytes);
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod utils;

/// Configure structured logging with JSON output.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Call it once, at the
/// start of the binary.
///
/// # Example
///
/// ```
/// gemini_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
