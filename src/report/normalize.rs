//! Report normalization
//!
//! Decoding already guarantees every container exists. Normalization adds
//! the one derived invariant: a report with theme points always has
//! clusters to group them by.

use serde_json::Value;

use super::decode::decode_report;
use super::model::{Cluster, ClusterId, Report, Themes};

/// Synthesize clusters from point membership when the backend sent none.
///
/// One cluster per distinct `point.cluster`, in first-seen order, labelled
/// "Cluster 1", "Cluster 2", ...
pub fn synthesize_clusters(themes: &mut Themes) {
    if !themes.clusters.is_empty() || themes.points.is_empty() {
        return;
    }

    let mut seen: Vec<&ClusterId> = Vec::new();
    for point in &themes.points {
        if !seen.contains(&&point.cluster) {
            seen.push(&point.cluster);
        }
    }

    themes.clusters = seen
        .into_iter()
        .enumerate()
        .map(|(i, id)| Cluster {
            id: id.clone(),
            label: format!("Cluster {}", i + 1),
        })
        .collect();
}

/// Bring a decoded report into canonical form. Idempotent.
pub fn normalize(mut report: Report) -> Report {
    synthesize_clusters(&mut report.themes);
    report
}

/// Decode + normalize straight from a raw payload
pub fn normalize_raw(raw: &Value) -> Report {
    normalize(decode_report(raw))
}

/// JSON in, canonical JSON out
pub fn normalize_value(raw: &Value) -> Value {
    normalize_raw(raw).to_value()
}
