//! Canonical report types
//!
//! These are the only shapes downstream code ever sees. Raw backend payloads
//! enter through [`super::decode::decode_report`]; serialization emits the
//! canonical JSON shape that the feature pages read back from storage.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// =============================================================================
// Identifiers
// =============================================================================

/// Cluster identifier as sent by the backend (k-means index or a string key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ClusterId {
    Int(i64),
    Text(String),
}

impl Default for ClusterId {
    fn default() -> Self {
        ClusterId::Int(0)
    }
}

impl std::fmt::Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterId::Int(n) => write!(f, "{}", n),
            ClusterId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ClusterId {
    fn from(n: i64) -> Self {
        ClusterId::Int(n)
    }
}

impl From<&str> for ClusterId {
    fn from(s: &str) -> Self {
        ClusterId::Text(s.to_string())
    }
}

// =============================================================================
// Keywords
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    pub token: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Keywords {
    /// Ordered by frequency (backend sorts)
    pub list: Vec<Keyword>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    /// Distinct vocabulary size, when the backend reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
}

// =============================================================================
// Themes
// =============================================================================

/// One projected token in the 2-D semantic map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemePoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub count: u64,
    pub cluster: ClusterId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub id: ClusterId,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Themes {
    pub points: Vec<ThemePoint>,
    pub clusters: Vec<Cluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Themes {
    /// Points belonging to one cluster, in payload order
    pub fn points_in<'a>(&'a self, id: &'a ClusterId) -> impl Iterator<Item = &'a ThemePoint> + 'a {
        self.points.iter().filter(move |p| &p.cluster == id)
    }
}

// =============================================================================
// Sentiment
// =============================================================================

/// Per-section sentiment sample for the timeline chart
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentSection {
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
}

/// Sentiment as reported by the backend.
///
/// Newer backends send a `positive/negative/neutral` breakdown, older ones a
/// `polarity/subjectivity` pair. Either, both, or neither may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sentiment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjectivity: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<SentimentSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Which sentiment signal a payload actually carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SentimentSignal {
    /// At least one non-zero breakdown component
    Breakdown { positive: f64, negative: f64, neutral: f64 },
    /// Breakdown empty or all zero, polarity present
    Polarity { polarity: f64, subjectivity: f64 },
    Absent,
}

impl Sentiment {
    pub fn signal(&self) -> SentimentSignal {
        let positive = self.positive.unwrap_or(0.0).max(0.0);
        let negative = self.negative.unwrap_or(0.0).max(0.0);
        let neutral = self.neutral.unwrap_or(0.0).max(0.0);

        if positive > 0.0 || negative > 0.0 || neutral > 0.0 {
            return SentimentSignal::Breakdown { positive, negative, neutral };
        }

        match self.polarity {
            Some(polarity) => SentimentSignal::Polarity {
                polarity,
                subjectivity: self.subjectivity.unwrap_or(0.0).clamp(0.0, 1.0),
            },
            None => SentimentSignal::Absent,
        }
    }
}

// =============================================================================
// Emotions
// =============================================================================

/// Emotion name -> score, in payload key order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionBreakdown(Vec<(String, f64)>);

impl EmotionBreakdown {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or overwrite, keeping the first-insertion position
    pub fn insert(&mut self, name: impl Into<String>, score: f64) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = score,
            None => self.0.push((name, score)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, s)| *s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(n, s)| (n.as_str(), *s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest-scoring emotion (first wins on ties)
    pub fn strongest(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (name, score) in self.iter() {
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((name, score));
            }
        }
        best.map(|(name, _)| name)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for EmotionBreakdown {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut breakdown = EmotionBreakdown::new();
        for (name, score) in iter {
            breakdown.insert(name, score);
        }
        breakdown
    }
}

impl Serialize for EmotionBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, score) in &self.0 {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Emotions {
    pub breakdown: EmotionBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Emotions {
    /// Backend-declared dominant emotion, else the strongest in the breakdown
    pub fn dominant(&self) -> Option<&str> {
        self.dominant.as_deref().or_else(|| self.breakdown.strongest())
    }
}

// =============================================================================
// Keyness
// =============================================================================

/// A token that is statistically distinctive against a reference corpus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeynessEntry {
    pub token: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Keyness {
    pub list: Vec<KeynessEntry>,
}

// =============================================================================
// Report
// =============================================================================

/// Canonical analysis result for one submitted document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub readability: f64,
    pub keywords: Keywords,
    pub themes: Themes,
    pub sentiment: Sentiment,
    pub emotions: Emotions,
    pub keyness: Keyness,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Report {
    /// Canonical JSON value (what gets persisted)
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
