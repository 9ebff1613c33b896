use crate::core::models::{DEFAULT_MAX_WORDS, SummaryStyle};

/// Opening instruction of every summarization prompt
pub const PROMPT_PREAMBLE: &str = "You are a helpful assistant that summarizes text.";

pub const BULLET_POINTS_INSTRUCTION: &str = "Return bullet points, each line starting with '- '.";

pub const NUMBERED_LIST_INSTRUCTION: &str =
    "Return a numbered list, one item per line like '1. ...'.";

/// Marker appended to a mock summary that dropped words
pub const TRUNCATION_SUFFIX: &str = "...";

#[must_use]
pub fn length_clause(max_words: Option<u32>) -> String {
    match max_words {
        Some(n) if n > 0 => format!("Max {n} words."),
        _ => "Keep it brief.".to_string(),
    }
}

#[must_use]
pub fn style_clause(style: SummaryStyle) -> String {
    match style {
        SummaryStyle::BulletPoints => BULLET_POINTS_INSTRUCTION.to_string(),
        SummaryStyle::NumberedList => NUMBERED_LIST_INSTRUCTION.to_string(),
        other => format!("Style: {}.", other.label()),
    }
}

/// Builds the single-turn instruction sent to the model.
#[must_use]
pub fn build_prompt(text: &str, max_words: Option<u32>, style: SummaryStyle) -> String {
    format!(
        "{PROMPT_PREAMBLE}\n{} {}\nReturn only the summary.\n\nTEXT:\n{text}",
        length_clause(max_words),
        style_clause(style),
    )
}

/// Deterministic stand-in for the model: the first `max_words` words of the
/// text (120 when unset or zero), with [`TRUNCATION_SUFFIX`] when words were dropped.
#[must_use]
pub fn mock_summary(text: &str, max_words: Option<u32>) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let limit = match max_words {
        Some(n) if n > 0 => n as usize,
        _ => DEFAULT_MAX_WORDS as usize,
    };

    let mut snippet = words.iter().take(limit).copied().collect::<Vec<_>>().join(" ");
    if words.len() > limit {
        snippet.push_str(TRUNCATION_SUFFIX);
    }
    snippet.trim().to_string()
}
