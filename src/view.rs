//! Dashboard view model
//!
//! Everything the page needs to paint in one serializable value: badge,
//! summary panel, chart data and suggestions, derived from whatever the
//! cache produced on load.

use serde::Serialize;

use crate::cache::DashboardLoad;
use crate::chart::ChartBundle;
use crate::config::DashboardConfig;
use crate::report::Report;
use crate::summary::{unique_word_count, DocumentBadge, ReportSummary, Suggestions};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Canonical report, None while nothing is cached yet
    pub report: Option<Report>,
    pub badge: DocumentBadge,
    pub unique_words: usize,
    pub summary: Option<ReportSummary>,
    pub suggestions: Option<Suggestions>,
    pub charts: ChartBundle,
}

impl DashboardView {
    pub fn build(load: &DashboardLoad, config: &DashboardConfig) -> Self {
        let badge = DocumentBadge::new(&load.meta, config);
        let unique_words = unique_word_count(&load.source_text);

        match &load.report {
            Some(report) => Self {
                report: Some(report.clone()),
                badge,
                unique_words,
                summary: Some(ReportSummary::from_report(report, config)),
                suggestions: Some(Suggestions::from_report(report)),
                charts: ChartBundle::from_report(report, config),
            },
            None => Self {
                report: None,
                badge,
                unique_words,
                summary: None,
                suggestions: None,
                charts: ChartBundle::empty(),
            },
        }
    }

    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::RefreshTicket;
    use crate::client::AnalyzeRequest;
    use crate::report::normalize_raw;
    use crate::state::UploadMeta;
    use serde_json::json;

    fn load_with(report: Option<Report>) -> DashboardLoad {
        DashboardLoad {
            report,
            meta: UploadMeta { name: Some("notes.txt".into()), words: 250 },
            source_text: "Rain, rain and more rain".into(),
            ticket: RefreshTicket {
                generation: 0,
                request: AnalyzeRequest { text: "Rain".into(), filename: "notes.txt".into() },
            },
        }
    }

    #[test]
    fn test_view_without_report_is_all_placeholders() {
        let view = DashboardView::build(&load_with(None), &DashboardConfig::default());
        assert!(!view.has_report());
        assert_eq!(view.charts, ChartBundle::empty());
        assert_eq!(view.badge.reading_minutes, 2);
        assert_eq!(view.unique_words, 3);
    }

    #[test]
    fn test_view_with_report() {
        let report = normalize_raw(&json!({
            "keywords": [{ "token": "rain", "count": 3 }],
            "sentiment": { "polarity": -0.1, "subjectivity": 0.2 }
        }));
        let view = DashboardView::build(&load_with(Some(report)), &DashboardConfig::default());

        assert!(view.charts.keywords.is_ready());
        assert!(view.charts.sentiment.is_ready());
        assert!(!view.charts.themes.is_ready());
        assert_eq!(view.summary.unwrap().top_keywords, "rain");
    }
}
