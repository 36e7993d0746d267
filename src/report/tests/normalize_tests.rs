//! Tests for report normalization
//!
//! Contract tests for the canonical-shape invariants.

use serde_json::json;

use crate::report::*;

// ============================================================================
// Themes invariants
// ============================================================================

#[test]
fn test_missing_themes_serialize_as_empty_arrays() {
    let value = normalize_value(&json!({ "readability": 50 }));
    assert_eq!(value["themes"]["points"], json!([]));
    assert_eq!(value["themes"]["clusters"], json!([]));
}

#[test]
fn test_cluster_synthesis_first_seen_order() {
    let value = normalize_value(&json!({
        "themes": {
            "points": [{ "cluster": "a" }, { "cluster": "b" }, { "cluster": "a" }],
            "clusters": []
        }
    }));
    assert_eq!(
        value["themes"]["clusters"],
        json!([{ "id": "a", "label": "Cluster 1" }, { "id": "b", "label": "Cluster 2" }])
    );
}

#[test]
fn test_existing_clusters_are_kept() {
    let report = normalize_raw(&json!({
        "themes": {
            "points": [{ "cluster": 0 }, { "cluster": 1 }],
            "clusters": [{ "id": 1, "label": "Only one" }]
        }
    }));
    assert_eq!(report.themes.clusters.len(), 1);
    assert_eq!(report.themes.clusters[0].label, "Only one");
}

#[test]
fn test_no_points_no_synthesis() {
    let report = normalize_raw(&json!({ "themes": { "points": [], "clusters": [] } }));
    assert!(report.themes.clusters.is_empty());
}

#[test]
fn test_legacy_points_synthesize_default_cluster() {
    let report = normalize_raw(&json!({ "themes": { "data": [{ "word": "x" }, { "word": "y" }] } }));
    assert_eq!(report.themes.clusters.len(), 1);
    assert_eq!(report.themes.clusters[0].id, ClusterId::Int(0));
    assert_eq!(report.themes.points_in(&ClusterId::Int(0)).count(), 2);
}

// ============================================================================
// Shape wrapping
// ============================================================================

#[test]
fn test_emotions_always_wrapped_in_breakdown() {
    let bare = normalize_value(&json!({ "emotions": { "joy": 0.4 } }));
    let wrapped = normalize_value(&json!({ "emotions": { "breakdown": { "joy": 0.4 } } }));
    assert_eq!(bare["emotions"], json!({ "breakdown": { "joy": 0.4 } }));
    assert_eq!(bare["emotions"], wrapped["emotions"]);

    let missing = normalize_value(&json!({}));
    assert_eq!(missing["emotions"], json!({ "breakdown": {} }));
}

#[test]
fn test_bare_keywords_wrapped_in_list() {
    let value = normalize_value(&json!({ "keywords": [{ "token": "t", "count": 1 }] }));
    assert_eq!(value["keywords"], json!({ "list": [{ "token": "t", "count": 1 }] }));
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_normalize_is_idempotent() {
    let raws = [
        json!({}),
        json!({
            "readability": 72,
            "keywords": [{ "token": "moon", "count": 4 }],
            "themes": { "points": [
                { "label": "moon", "x": 0.1, "y": 0.9, "count": 4, "cluster": 2 },
                { "label": "tide", "x": 0.3, "y": 0.7, "count": 2, "cluster": "x" }
            ] },
            "sentiment": { "pos": 3, "neg": 1, "polarity": 0.2, "timeline": [{ "pos": 1, "neu": 2, "neg": 3 }] },
            "emotions": { "Happy": 0.3, "Sad": 0.1 },
            "keyness": { "list": [{ "token": "moon", "keyness": 8.1 }] },
            "summary": "Night."
        }),
        json!({ "sentiment": -0.4, "emotions": { "dominant": "Fear", "distribution": { "Fear": 30 } } }),
    ];

    for raw in raws {
        let once = normalize_value(&raw);
        let twice = normalize_value(&once);
        assert_eq!(once, twice);
        assert_eq!(normalize_raw(&once), normalize_raw(&raw));
    }
}

// ============================================================================
// JSON text boundary
// ============================================================================

#[test]
fn test_from_json_str_rejects_invalid_json() {
    assert!(matches!(
        Report::from_json_str("{not json"),
        Err(crate::error::DashboardError::MalformedCache(_))
    ));
}

#[test]
fn test_from_json_str_accepts_any_value() {
    let report = Report::from_json_str("[]").unwrap();
    assert_eq!(report, Report::default());
}
