//! Request body decoding: content-type dispatch and text extraction.

use serde_json::Value;

use crate::errors::SummarizeError;

pub const MISSING_TEXT_DETAIL: &str = "JSON body must include 'text'.";
pub const EMPTY_TEXT_DETAIL: &str = "Text cannot be empty.";

/// Body formats the summarize endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    PlainText,
    Json,
}

impl BodyKind {
    /// Classifies a raw `Content-Type` header value by case-insensitive prefix.
    #[must_use]
    pub fn from_content_type(content_type: &[u8]) -> Option<Self> {
        let start = content_type
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(content_type.len());
        let value = &content_type[start..];

        let has_prefix = |prefix: &str| {
            value
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
        };

        if has_prefix("text/plain") {
            Some(BodyKind::PlainText)
        } else if has_prefix("application/json") {
            Some(BodyKind::Json)
        } else {
            None
        }
    }
}

/// Extracts the text payload from a request body.
///
/// # Errors
///
/// `UnsupportedMediaType` for anything but JSON or plain text, and
/// `Unprocessable` when the JSON lacks `text` or the text is blank.
pub fn decode_text(content_type: Option<&[u8]>, body: &[u8]) -> Result<String, SummarizeError> {
    let kind = content_type
        .and_then(BodyKind::from_content_type)
        .ok_or(SummarizeError::UnsupportedMediaType)?;

    let text = match kind {
        BodyKind::PlainText => String::from_utf8_lossy(body).into_owned(),
        BodyKind::Json => text_from_json(body)?,
    };

    if text.trim().is_empty() {
        return Err(SummarizeError::unprocessable(EMPTY_TEXT_DETAIL));
    }
    Ok(text)
}

fn text_from_json(body: &[u8]) -> Result<String, SummarizeError> {
    let missing = || SummarizeError::unprocessable(MISSING_TEXT_DETAIL);

    let value: Value = serde_json::from_slice(body).map_err(|_| missing())?;
    let field = value
        .as_object()
        .and_then(|map| map.get("text"))
        .ok_or_else(missing)?;

    // Non-string values keep their JSON spelling, so `null` becomes "null"
    // and is summarized rather than rejected as blank.
    Ok(match field {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
