use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Word target used when the caller does not pass `max_words`.
pub const DEFAULT_MAX_WORDS: u32 = 120;
pub const MIN_MAX_WORDS: u32 = 20;
pub const MAX_MAX_WORDS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SummaryStyle {
    #[default]
    #[serde(rename = "concise")]
    Concise,
    #[serde(rename = "executive")]
    Executive,
    #[serde(rename = "bullet points")]
    BulletPoints,
    #[serde(rename = "numbered list")]
    NumberedList,
    #[serde(rename = "simple")]
    Simple,
    #[serde(rename = "technical")]
    Technical,
    #[serde(rename = "highlights")]
    Highlights,
    #[serde(rename = "action items")]
    ActionItems,
    #[serde(rename = "key takeaways")]
    KeyTakeaways,
    #[serde(rename = "tl;dr")]
    Tldr,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 10] = [
        SummaryStyle::Concise,
        SummaryStyle::Executive,
        SummaryStyle::BulletPoints,
        SummaryStyle::NumberedList,
        SummaryStyle::Simple,
        SummaryStyle::Technical,
        SummaryStyle::Highlights,
        SummaryStyle::ActionItems,
        SummaryStyle::KeyTakeaways,
        SummaryStyle::Tldr,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SummaryStyle::Concise => "concise",
            SummaryStyle::Executive => "executive",
            SummaryStyle::BulletPoints => "bullet points",
            SummaryStyle::NumberedList => "numbered list",
            SummaryStyle::Simple => "simple",
            SummaryStyle::Technical => "technical",
            SummaryStyle::Highlights => "highlights",
            SummaryStyle::ActionItems => "action items",
            SummaryStyle::KeyTakeaways => "key takeaways",
            SummaryStyle::Tldr => "tl;dr",
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SummaryStyle::ALL
            .into_iter()
            .find(|style| style.label() == s)
            .ok_or_else(|| format!("Unknown style '{s}'"))
    }
}

/// Validated query options for a summarize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarizeOptions {
    pub style: SummaryStyle,
    /// `None` disables length targeting.
    pub max_words: Option<u32>,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            style: SummaryStyle::default(),
            max_words: Some(DEFAULT_MAX_WORDS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMeta {
    pub model: String,
    pub max_words: Option<u32>,
    pub style: SummaryStyle,
    pub mock: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub meta: SummaryMeta,
}
