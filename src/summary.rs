//! Summary panel, document badge and writing suggestions

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::config::DashboardConfig;
use crate::report::Report;
use crate::sentiment::SentimentMix;
use crate::state::UploadMeta;

/// Placeholder for empty text fields
pub const EMPTY_FIELD: &str = "—";

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"(?-u:\b)[A-Za-z0-9_'-]+(?-u:\b)").expect("word pattern is valid"))
}

/// Distinct lowercase words in the uploaded text.
///
/// Word characters are ASCII only, so accented letters split a word.
pub fn unique_word_count(text: &str) -> usize {
    word_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

// =============================================================================
// Document badge
// =============================================================================

/// File name, word count and reading time shown above the charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentBadge {
    pub name: String,
    pub words: u64,
    pub reading_minutes: u64,
}

impl DocumentBadge {
    pub fn new(meta: &UploadMeta, config: &DashboardConfig) -> Self {
        let wpm = config.words_per_minute.max(1);
        Self {
            name: meta
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "none".to_string()),
            words: meta.words,
            reading_minutes: meta.words.div_ceil(wpm).max(1),
        }
    }
}

// =============================================================================
// Summary panel
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub readability: i64,
    pub sentiment: SentimentMix,
    pub top_keywords: String,
    pub top_theme: String,
    pub dominant_emotion: Option<String>,
    pub text: Option<String>,
}

impl ReportSummary {
    pub fn from_report(report: &Report, config: &DashboardConfig) -> Self {
        let top_keywords = report
            .keywords
            .list
            .iter()
            .take(config.summary_keywords)
            .map(|k| k.token.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let top_theme = report
            .themes
            .points
            .first()
            .map(|p| p.label.clone())
            .filter(|l| !l.is_empty());

        Self {
            readability: report.readability.round() as i64,
            sentiment: SentimentMix::derive(&report.sentiment, config.neutral_weight),
            top_keywords: if top_keywords.is_empty() {
                EMPTY_FIELD.to_string()
            } else {
                top_keywords
            },
            top_theme: top_theme.unwrap_or_else(|| EMPTY_FIELD.to_string()),
            dominant_emotion: report.emotions.dominant().map(str::to_string),
            text: report.summary.clone().filter(|s| !s.trim().is_empty()),
        }
    }
}

// =============================================================================
// Suggestions
// =============================================================================

/// Feature page a suggestion list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Keywords,
    Themes,
    Sentiment,
    Emotions,
}

pub fn default_suggestions(section: Section) -> &'static [&'static str] {
    match section {
        Section::Keywords => &[
            "Check for overused words and replace them with fresh or vivid alternatives.",
            "Use precise nouns and strong verbs instead of repetitive adjectives or fillers.",
            "Aim for natural repetition: recurring words should enhance rhythm, not redundancy.",
            "Highlight key terms that truly define your piece; trim words that dilute focus.",
        ],
        Section::Themes => &[
            "Identify the core message that ties all ideas together and ensure consistency.",
            "Avoid introducing unrelated topics that distract from your central theme.",
            "Use metaphors or imagery that reinforce your main theme across paragraphs.",
            "Keep transitions smooth so readers can trace how one theme evolves into the next.",
        ],
        Section::Sentiment => &[
            "Check for tone consistency: ensure positive and negative sections balance well.",
            "If tone shifts abruptly, add transitional phrases to ease emotional flow.",
            "Strengthen positive sentiments with sensory language and clarity of intent.",
            "Use negative tones purposefully to create contrast or emotional depth, not confusion.",
        ],
        Section::Emotions => &[
            "Explore emotional diversity: mix joy, fear, or surprise to add depth.",
            "Use emotional words strategically rather than clustering them in one area.",
            "Balance intense emotions with reflective or neutral passages for pacing.",
            "Let emotions show through actions or descriptions, not just direct statements.",
        ],
    }
}

/// Backend suggestions when present and non-empty, defaults otherwise
pub fn suggestions_for(report: &Report, section: Section) -> Vec<String> {
    let from_report = match section {
        Section::Keywords => report.keywords.suggestions.as_ref(),
        Section::Themes => report.themes.suggestions.as_ref(),
        Section::Sentiment => report.sentiment.suggestions.as_ref(),
        Section::Emotions => report.emotions.suggestions.as_ref(),
    };

    match from_report {
        Some(list) if !list.is_empty() => list.clone(),
        _ => default_suggestions(section).iter().map(|s| s.to_string()).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestions {
    pub keywords: Vec<String>,
    pub themes: Vec<String>,
    pub sentiment: Vec<String>,
    pub emotions: Vec<String>,
}

impl Suggestions {
    pub fn from_report(report: &Report) -> Self {
        Self {
            keywords: suggestions_for(report, Section::Keywords),
            themes: suggestions_for(report, Section::Themes),
            sentiment: suggestions_for(report, Section::Sentiment),
            emotions: suggestions_for(report, Section::Emotions),
        }
    }
}
