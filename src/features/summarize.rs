use tracing::{info, warn};

use crate::ai::TextGenerator;
use crate::core::models::{SummarizeOptions, SummarizeResponse, SummaryMeta};
use crate::errors::SummarizeError;
use crate::prompt::{build_prompt, mock_summary};
use crate::utils::text::clean_text;

/// Generate a summary for already-decoded request text.
///
/// The text is normalized first. In mock mode the generator is never
/// called and the summary is a truncated copy of the cleaned text.
///
/// # Errors
///
/// Returns `EmptySummary` when the resulting summary is blank, or
/// whatever error the generator reports.
pub async fn summarize_text(
    generator: &dyn TextGenerator,
    text: &str,
    options: SummarizeOptions,
    mock: bool,
) -> Result<SummarizeResponse, SummarizeError> {
    let cleaned = clean_text(text);
    info!(
        cleaned_chars = cleaned.chars().count(),
        style = %options.style,
        max_words = ?options.max_words,
        mock,
        "Summarizing text"
    );

    let summary = if mock {
        mock_summary(&cleaned, options.max_words)
    } else {
        let prompt = build_prompt(&cleaned, options.max_words, options.style);
        generator
            .generate(&prompt)
            .await
            .inspect_err(|e| warn!("Model call failed: {}", e))?
            .trim()
            .to_string()
    };

    if summary.is_empty() {
        return Err(SummarizeError::EmptySummary);
    }

    Ok(SummarizeResponse {
        summary,
        meta: SummaryMeta {
            model: generator.model_name().to_string(),
            max_words: options.max_words,
            style: options.style,
            mock,
        },
    })
}
