use serde::Deserialize;

use crate::core::models::{
    DEFAULT_MAX_WORDS, MAX_MAX_WORDS, MIN_MAX_WORDS, SummarizeOptions, SummaryStyle,
};
use crate::errors::SummarizeError;

/// Raw query string of `POST /summarize`, validated by [`parse_options`].
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeParams {
    pub style: Option<String>,
    pub max_words: Option<String>,
}

/// # Errors
///
/// Returns `Unprocessable` for an unknown style label or a `max_words`
/// value that is not an integer in 20..=400.
pub fn parse_options(params: &SummarizeParams) -> Result<SummarizeOptions, SummarizeError> {
    let style = match params.style.as_deref() {
        None => SummaryStyle::default(),
        Some(raw) => raw.parse().map_err(|_| {
            let allowed = SummaryStyle::ALL
                .iter()
                .map(|s| format!("'{}'", s.label()))
                .collect::<Vec<_>>()
                .join(", ");
            SummarizeError::unprocessable(format!(
                "Query parameter 'style' must be one of: {allowed}."
            ))
        })?,
    };

    let max_words = match params.max_words.as_deref().map(str::trim) {
        None => Some(DEFAULT_MAX_WORDS),
        // An explicitly empty value turns length targeting off.
        Some("") => None,
        Some(raw) => Some(parse_max_words(raw)?),
    };

    Ok(SummarizeOptions { style, max_words })
}

fn parse_max_words(raw: &str) -> Result<u32, SummarizeError> {
    let out_of_range = || {
        SummarizeError::unprocessable(format!(
            "Query parameter 'max_words' must be an integer between {MIN_MAX_WORDS} and {MAX_MAX_WORDS}."
        ))
    };
    let value: i64 = raw.parse().map_err(|_| out_of_range())?;
    u32::try_from(value)
        .ok()
        .filter(|v| (MIN_MAX_WORDS..=MAX_MAX_WORDS).contains(v))
        .ok_or_else(out_of_range)
}
