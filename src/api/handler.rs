//! HTTP surface: router construction and the summarize endpoint.
//!
//! Request flow per call:
//! - query options are validated (`parsing`)
//! - the body is decoded according to `Content-Type` (`decoder`)
//! - the text is summarized (`features::summarize`)

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        DefaultBodyLimit, Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::{HeaderMap, header},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use super::{decoder, parsing};
use crate::ai::TextGenerator;
use crate::core::config::MockSwitch;
use crate::core::models::SummarizeResponse;
use crate::errors::SummarizeError;
use crate::features::summarize_text;

pub const SERVICE_NAME: &str = "gemini-summarizer";

/// Process-wide state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub mock: MockSwitch,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, mock: MockSwitch) -> Self {
        Self { generator, mock }
    }
}

pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/summarize", post(summarize))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

#[derive(Serialize)]
struct Health {
    ok: bool,
    service: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        service: SERVICE_NAME,
    })
}

/// `POST /summarize`
///
/// # Errors
///
/// 413 for oversized bodies, 415 for unsupported content types, 422 for bad
/// query options or missing text, 500 for empty or failed model output.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn summarize(
    State(state): State<AppState>,
    query: Result<Query<parsing::SummarizeParams>, QueryRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SummarizeResponse>, SummarizeError> {
    let Query(params) =
        query.map_err(|e| SummarizeError::unprocessable(format!("Invalid query string: {e}")))?;
    let options = parsing::parse_options(&params)?;

    let body = body.map_err(|e| SummarizeError::BodyRejected(e.status(), e.body_text()))?;

    // Header values may carry non-ASCII bytes; dispatch only looks at the prefix.
    let content_type = headers.get(header::CONTENT_TYPE).map(|v| v.as_bytes());
    let text = decoder::decode_text(content_type, &body).inspect_err(|e| {
        info!(status = e.status_code().as_u16(), "Rejected request body: {}", e);
    })?;

    // Read once so the response metadata matches the path actually taken.
    let mock = state.mock.is_enabled();

    let response = summarize_text(state.generator.as_ref(), &text, options, mock)
        .await
        .inspect_err(|e| error!("Summarization failed: {}", e))?;

    info!(
        summary_chars = response.summary.chars().count(),
        mock, "Summary generated"
    );
    Ok(Json(response))
}
