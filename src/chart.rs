//! Chart data adapters
//!
//! Shape a normalized [`Report`] into the label/value arrays and bubble
//! datasets the charting layer consumes, and decide per chart whether there
//! is anything worth drawing. A chart "has data" only when it has labels and
//! at least one value strictly above zero; otherwise the view shows the
//! striped "no data" placeholder.

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::report::{ClusterId, Report, Themes};
use crate::sentiment::SentimentMix;

pub const SENTIMENT_LABELS: [&str; 3] = ["Positive", "Neutral", "Negative"];
pub const IMPLICIT_SERIES_LABEL: &str = "Semantic Points";

// =============================================================================
// Types
// =============================================================================

/// Parallel label/value arrays for bar, doughnut and radar charts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn has_data(&self) -> bool {
        has_data(&self.labels, &self.values)
    }
}

/// Render decision for one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ChartState<T> {
    Ready(T),
    Placeholder,
}

impl<T> ChartState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ChartState::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartState::Ready(data) => Some(data),
            ChartState::Placeholder => None,
        }
    }
}

/// One bubble on the semantic theme map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub label: String,
}

/// One legend entry on the theme map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleDataset {
    /// Legend text ("Cluster 1", ... or "Semantic Points")
    pub label: String,
    /// Backend cluster id; None for the implicit series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<ClusterId>,
    /// Cluster's own label, shown when a bubble is clicked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_label: Option<String>,
    pub points: Vec<BubblePoint>,
}

/// Section-by-section sentiment lines
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineSeries {
    pub labels: Vec<String>,
    pub positive: Vec<f64>,
    pub neutral: Vec<f64>,
    pub negative: Vec<f64>,
}

/// The non-zero rule shared by every chart
pub fn has_data(labels: &[String], values: &[f64]) -> bool {
    !labels.is_empty() && values.iter().any(|v| *v > 0.0)
}

fn gate(series: ChartSeries) -> ChartState<ChartSeries> {
    if series.has_data() {
        ChartState::Ready(series)
    } else {
        ChartState::Placeholder
    }
}

// =============================================================================
// Adapters
// =============================================================================

/// Top keywords in backend order (already sorted by count)
pub fn keyword_series(report: &Report, limit: usize) -> ChartSeries {
    let top = report.keywords.list.iter().take(limit);
    ChartSeries {
        labels: top.clone().map(|k| k.token.clone()).collect(),
        values: top.map(|k| k.count as f64).collect(),
    }
}

pub fn keyword_chart(report: &Report, config: &DashboardConfig) -> ChartState<ChartSeries> {
    gate(keyword_series(report, config.top_keywords))
}

/// Always three entries: Positive, Neutral, Negative
pub fn sentiment_series(mix: &SentimentMix) -> ChartSeries {
    ChartSeries {
        labels: SENTIMENT_LABELS.iter().map(|s| s.to_string()).collect(),
        values: mix.as_array().to_vec(),
    }
}

pub fn sentiment_chart(mix: &SentimentMix) -> ChartState<ChartSeries> {
    gate(sentiment_series(mix))
}

/// Every emotion in breakdown order
pub fn emotion_series(report: &Report) -> ChartSeries {
    let breakdown = &report.emotions.breakdown;
    ChartSeries {
        labels: breakdown.iter().map(|(name, _)| name.to_string()).collect(),
        values: breakdown.iter().map(|(_, score)| score).collect(),
    }
}

pub fn emotion_chart(report: &Report) -> ChartState<ChartSeries> {
    gate(emotion_series(report))
}

/// Most distinctive tokens
pub fn keyness_series(report: &Report, limit: usize) -> ChartSeries {
    let top = report.keyness.list.iter().take(limit);
    ChartSeries {
        labels: top.clone().map(|e| e.token.clone()).collect(),
        values: top.map(|e| e.score).collect(),
    }
}

pub fn keyness_chart(report: &Report, config: &DashboardConfig) -> ChartState<ChartSeries> {
    gate(keyness_series(report, config.top_keyness))
}

pub fn timeline_series(report: &Report) -> TimelineSeries {
    let timeline = &report.sentiment.timeline;
    TimelineSeries {
        labels: (1..=timeline.len()).map(|i| format!("Section {}", i)).collect(),
        positive: timeline.iter().map(|s| s.pos).collect(),
        neutral: timeline.iter().map(|s| s.neu).collect(),
        negative: timeline.iter().map(|s| s.neg).collect(),
    }
}

pub fn timeline_chart(report: &Report) -> ChartState<TimelineSeries> {
    let series = timeline_series(report);
    let any_signal = [&series.positive, &series.neutral, &series.negative]
        .iter()
        .any(|values| has_data(&series.labels, values));
    if any_signal {
        ChartState::Ready(series)
    } else {
        ChartState::Placeholder
    }
}

/// Group theme points into one bubble dataset per cluster.
///
/// With no clusters at all, every point goes into a single implicit
/// "Semantic Points" series drawn at a fixed radius.
pub fn theme_datasets(themes: &Themes, config: &DashboardConfig) -> Vec<BubbleDataset> {
    if themes.clusters.is_empty() {
        return vec![BubbleDataset {
            label: IMPLICIT_SERIES_LABEL.to_string(),
            cluster: None,
            cluster_label: None,
            points: themes
                .points
                .iter()
                .map(|p| BubblePoint {
                    x: p.x,
                    y: p.y,
                    r: config.implicit_point_radius,
                    label: p.label.clone(),
                })
                .collect(),
        }];
    }

    themes
        .clusters
        .iter()
        .enumerate()
        .map(|(i, cluster)| BubbleDataset {
            label: format!("Cluster {}", i + 1),
            cluster: Some(cluster.id.clone()),
            cluster_label: Some(cluster.label.clone()),
            points: themes
                .points_in(&cluster.id)
                .map(|p| BubblePoint {
                    x: p.x,
                    y: p.y,
                    r: config.bubble_radius(p.count as f64),
                    label: p.label.clone(),
                })
                .collect(),
        })
        .collect()
}

pub fn theme_chart(report: &Report, config: &DashboardConfig) -> ChartState<Vec<BubbleDataset>> {
    let datasets = theme_datasets(&report.themes, config);
    let radii: Vec<f64> = datasets
        .iter()
        .flat_map(|d| d.points.iter().map(|p| p.r))
        .collect();
    if radii.iter().any(|r| *r > 0.0) {
        ChartState::Ready(datasets)
    } else {
        ChartState::Placeholder
    }
}

// =============================================================================
// Bundle
// =============================================================================

/// Every chart on the dashboard and feature pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBundle {
    pub keywords: ChartState<ChartSeries>,
    pub sentiment: ChartState<ChartSeries>,
    pub emotions: ChartState<ChartSeries>,
    pub themes: ChartState<Vec<BubbleDataset>>,
    pub keyness: ChartState<ChartSeries>,
    pub timeline: ChartState<TimelineSeries>,
}

impl ChartBundle {
    pub fn from_report(report: &Report, config: &DashboardConfig) -> Self {
        let mix = SentimentMix::derive(&report.sentiment, config.neutral_weight);
        Self {
            keywords: keyword_chart(report, config),
            sentiment: sentiment_chart(&mix),
            emotions: emotion_chart(report),
            themes: theme_chart(report, config),
            keyness: keyness_chart(report, config),
            timeline: timeline_chart(report),
        }
    }

    /// All placeholders (no report available yet)
    pub fn empty() -> Self {
        Self {
            keywords: ChartState::Placeholder,
            sentiment: ChartState::Placeholder,
            emotions: ChartState::Placeholder,
            themes: ChartState::Placeholder,
            keyness: ChartState::Placeholder,
            timeline: ChartState::Placeholder,
        }
    }
}
