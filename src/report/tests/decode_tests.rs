//! Tests for tolerant report decoding
//!
//! Contract tests covering every backend payload shape seen in the wild.

use serde_json::json;

use crate::report::decode::*;
use crate::report::model::*;

// ============================================================================
// Whole-report Contract Tests
// ============================================================================

#[test]
fn test_non_object_payload_decodes_to_empty_report() {
    for raw in [json!(null), json!(42), json!("report"), json!([1, 2, 3])] {
        let report = decode_report(&raw);
        assert_eq!(report, Report::default());
    }
}

#[test]
fn test_full_canonical_payload() {
    let raw = json!({
        "readability": 61.4,
        "keywords": { "list": [{ "token": "river", "count": 7 }], "suggestions": ["Vary words"] },
        "themes": {
            "points": [{ "label": "river", "x": 0.2, "y": 0.8, "count": 3, "cluster": 1 }],
            "clusters": [{ "id": 1, "label": "Nature" }]
        },
        "sentiment": { "positive": 0.4, "negative": 0.1, "neutral": 0.5 },
        "emotions": { "breakdown": { "joy": 0.6, "fear": 0.1 }, "dominant": "joy" },
        "keyness": { "list": [{ "token": "river", "score": 12.5 }] },
        "summary": "A calm text."
    });

    let report = decode_report(&raw);
    assert!((report.readability - 61.4).abs() < 1e-9);
    assert_eq!(report.keywords.list[0], Keyword { token: "river".into(), count: 7 });
    assert_eq!(report.keywords.suggestions, Some(vec!["Vary words".to_string()]));
    assert_eq!(report.themes.points[0].cluster, ClusterId::Int(1));
    assert_eq!(report.themes.clusters[0].label, "Nature");
    assert_eq!(report.sentiment.positive, Some(0.4));
    assert_eq!(report.emotions.breakdown.get("joy"), Some(0.6));
    assert_eq!(report.emotions.dominant.as_deref(), Some("joy"));
    assert_eq!(report.keyness.list[0].score, 12.5);
    assert_eq!(report.summary.as_deref(), Some("A calm text."));
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_bare_keyword_array_is_wrapped() {
    let keywords = decode_keywords(Some(&json!([
        { "token": "a", "count": 3 },
        { "token": "b", "count": "2" }
    ])));
    assert_eq!(keywords.list.len(), 2);
    assert_eq!(keywords.list[1].count, 2);
    assert!(keywords.suggestions.is_none());
}

#[test]
fn test_legacy_keyword_metadata() {
    let keywords = decode_keywords(Some(&json!({
        "unique": 120,
        "top": "sea",
        "list": [{ "token": "sea", "count": 9 }]
    })));
    assert_eq!(keywords.unique, Some(120));
    assert_eq!(keywords.top.as_deref(), Some("sea"));
}

#[test]
fn test_keyword_garbage_is_skipped() {
    let keywords = decode_keywords(Some(&json!({ "list": [1, "x", { "token": "ok", "count": -4 }] })));
    assert_eq!(keywords.list, vec![Keyword { token: "ok".into(), count: 0 }]);

    let keywords = decode_keywords(Some(&json!({ "list": "nope" })));
    assert!(keywords.list.is_empty());
}

// ============================================================================
// Themes
// ============================================================================

#[test]
fn test_missing_themes_are_empty() {
    let themes = decode_themes(None);
    assert!(themes.points.is_empty());
    assert!(themes.clusters.is_empty());
}

#[test]
fn test_non_array_points_and_clusters_coerced() {
    let themes = decode_themes(Some(&json!({ "points": {}, "clusters": 3 })));
    assert!(themes.points.is_empty());
    assert!(themes.clusters.is_empty());
}

#[test]
fn test_legacy_theme_data_used_as_points() {
    let themes = decode_themes(Some(&json!({
        "clusters": 2,
        "top_theme": ["sea"],
        "data": [{ "word": "sea", "x": 1.5, "y": -0.3 }]
    })));
    assert_eq!(themes.points.len(), 1);
    let point = &themes.points[0];
    assert_eq!(point.label, "sea");
    assert_eq!(point.count, 1);
    assert_eq!(point.cluster, ClusterId::Int(0));
    assert!(themes.clusters.is_empty());
}

#[test]
fn test_cluster_ids_keep_their_kind() {
    let themes = decode_themes(Some(&json!({
        "points": [
            { "label": "a", "cluster": "alpha" },
            { "label": "b", "cluster": 2.0 },
            { "label": "c", "cluster": 2.5 }
        ]
    })));
    assert_eq!(themes.points[0].cluster, ClusterId::Text("alpha".into()));
    assert_eq!(themes.points[1].cluster, ClusterId::Int(2));
    assert_eq!(themes.points[2].cluster, ClusterId::Text("2.5".into()));
}

#[test]
fn test_unlabelled_cluster_gets_positional_label() {
    let themes = decode_themes(Some(&json!({ "clusters": [{ "id": 4 }, { "id": 9, "label": "Loss" }] })));
    assert_eq!(themes.clusters[0].label, "Cluster 1");
    assert_eq!(themes.clusters[1].label, "Loss");
}

// ============================================================================
// Sentiment
// ============================================================================

#[test]
fn test_bare_number_sentiment_is_polarity() {
    let sentiment = decode_sentiment(Some(&json!(-0.25)));
    assert_eq!(sentiment.polarity, Some(-0.25));
    assert!(sentiment.positive.is_none());
}

#[test]
fn test_legacy_pos_neu_neg_aliases() {
    let sentiment = decode_sentiment(Some(&json!({ "pos": 30, "neu": 60, "neg": 10 })));
    assert_eq!(sentiment.positive, Some(30.0));
    assert_eq!(sentiment.neutral, Some(60.0));
    assert_eq!(sentiment.negative, Some(10.0));
}

#[test]
fn test_sentiment_timeline_sections() {
    let sentiment = decode_sentiment(Some(&json!({
        "timeline": [{ "pos": 45, "neu": 40, "neg": 15 }, "junk", { "pos": 10 }]
    })));
    assert_eq!(sentiment.timeline.len(), 2);
    assert_eq!(sentiment.timeline[1], SentimentSection { pos: 10.0, neu: 0.0, neg: 0.0 });
}

#[test]
fn test_non_numeric_sentiment_fields_become_zero() {
    let sentiment = decode_sentiment(Some(&json!({ "positive": "lots", "polarity": null })));
    assert_eq!(sentiment.positive, Some(0.0));
    assert_eq!(sentiment.polarity, None);
}

// ============================================================================
// Emotions
// ============================================================================

#[test]
fn test_bare_emotion_mapping_is_wrapped() {
    let emotions = decode_emotions(Some(&json!({ "Happy": 0.2, "Sad": 0.5, "Angry": 0 })));
    let labels: Vec<&str> = emotions.breakdown.iter().map(|(k, _)| k).collect();
    assert_eq!(labels, vec!["Happy", "Sad", "Angry"]);
}

#[test]
fn test_legacy_distribution_shape() {
    let emotions = decode_emotions(Some(&json!({
        "dominant": "Fear",
        "distribution": { "Fear": 40, "Happy": 10 }
    })));
    assert_eq!(emotions.breakdown.len(), 2);
    assert_eq!(emotions.breakdown.get("Fear"), Some(40.0));
    assert_eq!(emotions.dominant.as_deref(), Some("Fear"));
}

#[test]
fn test_bare_mapping_skips_metadata_keys() {
    let emotions = decode_emotions(Some(&json!({ "joy": 1, "dominant": "joy", "suggestions": [] })));
    assert_eq!(emotions.breakdown.len(), 1);
    assert_eq!(emotions.dominant.as_deref(), Some("joy"));
}

#[test]
fn test_bare_mapping_skips_null_wrapper_keys() {
    let emotions = decode_emotions(Some(&json!({ "breakdown": null, "joy": 1 })));
    assert_eq!(emotions.breakdown.len(), 1);
    assert_eq!(emotions.breakdown.get("joy"), Some(1.0));

    let emotions = decode_emotions(Some(&json!({ "distribution": null, "sadness": 0.3 })));
    assert_eq!(emotions.breakdown.len(), 1);
    assert_eq!(emotions.breakdown.get("distribution"), None);
}

#[test]
fn test_missing_emotions_are_empty() {
    assert!(decode_emotions(None).breakdown.is_empty());
    assert!(decode_emotions(Some(&json!("joy"))).breakdown.is_empty());
}

// ============================================================================
// Keyness
// ============================================================================

#[test]
fn test_keyness_score_fallback_chain() {
    let keyness = decode_keyness(Some(&json!({
        "list": [
            { "token": "a", "score": 3.5 },
            { "token": "b", "keyness": 2.0 },
            { "token": "c", "score": 0, "count": 4 },
            { "token": "d" }
        ]
    })));
    let scores: Vec<f64> = keyness.list.iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![3.5, 2.0, 4.0, 0.0]);
}

#[test]
fn test_keyness_non_array_list() {
    assert!(decode_keyness(Some(&json!({ "list": 5 }))).list.is_empty());
}
