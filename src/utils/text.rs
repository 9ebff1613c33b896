//! Input text normalization applied before prompting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Token substituted for every URL found in the input.
pub const URL_PLACEHOLDER: &str = "[URL]";

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("static regex compile"));

// Newline (0x0A), tab (0x09) and carriage return (0x0D) are outside these ranges.
static CONTROL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x08\x0b\x0c\x0e-\x1f\x7f]").expect("static regex compile")
});

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex compile"));

/// Normalizes raw input into the canonical form used for prompting.
///
/// Steps, in order: literal `\n` escapes become newlines, URLs become
/// [`URL_PLACEHOLDER`], control characters are dropped, and whitespace runs
/// collapse to a single space. The result is trimmed but may be empty.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let text = text.replace("\\n", "\n");
    let text = URL_RE.replace_all(&text, URL_PLACEHOLDER);
    let text = CONTROL_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
