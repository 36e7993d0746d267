//! Sentiment percentage derivation
//!
//! Turns whatever sentiment signal a report carries into a
//! Positive / Neutral / Negative split that sums to 100.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::report::decode::decode_sentiment;
use crate::report::{Sentiment, SentimentSignal};

/// Sentiment split in percent, one decimal place
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentMix {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentMix {
    /// Derive percentages from a report's sentiment.
    ///
    /// The neutral component is multiplied by `neutral_weight` before the
    /// three components are normalized to 100. With no signal at all the
    /// result is all zeros.
    pub fn derive(sentiment: &Sentiment, neutral_weight: f64) -> Self {
        let (positive, negative, neutral) = match sentiment.signal() {
            SentimentSignal::Breakdown { positive, negative, neutral } => (positive, negative, neutral),
            SentimentSignal::Polarity { polarity, subjectivity } => (
                polarity.max(0.0),
                (-polarity).max(0.0),
                (1.0 - subjectivity) * 0.5,
            ),
            SentimentSignal::Absent => (0.0, 0.0, 0.0),
        };

        let neutral = neutral * neutral_weight;
        let sum = positive + negative + neutral;
        let total = if sum > 0.0 { sum } else { 1.0 };

        Self {
            positive: round1(positive / total * 100.0),
            neutral: round1(neutral / total * 100.0),
            negative: round1(negative / total * 100.0),
        }
    }

    /// Derive from a raw, undecoded sentiment value
    pub fn derive_raw(raw: &Value, neutral_weight: f64) -> Self {
        Self::derive(&decode_sentiment(Some(raw)), neutral_weight)
    }

    /// `[positive, neutral, negative]`, the order the doughnut chart uses
    pub fn as_array(&self) -> [f64; 3] {
        [self.positive, self.neutral, self.negative]
    }

    pub fn has_data(&self) -> bool {
        self.as_array().iter().any(|v| *v > 0.0)
    }

    /// Label of the largest share ("Positive", "Neutral", "Negative")
    pub fn dominant(&self) -> Option<&'static str> {
        if !self.has_data() {
            return None;
        }
        let mut best = ("Positive", self.positive);
        for candidate in [("Neutral", self.neutral), ("Negative", self.negative)] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        Some(best.0)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
