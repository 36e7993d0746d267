//! Tolerant decoding of raw backend payloads
//!
//! Backend versions disagree on shapes: keywords as a bare array or wrapped
//! in `{list}`, emotions as a bare mapping or wrapped in `{breakdown}`,
//! sentiment as a number, a breakdown, or a polarity pair. All of that
//! ambiguity is resolved here, once. Nothing in this module fails: a field
//! that is missing or of the wrong type decodes to its empty default.

use serde_json::{Map, Value};

use super::model::*;

/// Keys of an emotions object that are metadata, not emotion scores
const EMOTION_META_KEYS: &[&str] = &["dominant", "suggestions", "breakdown", "distribution"];

// =============================================================================
// Scalar coercion
// =============================================================================

/// Numeric coercion with `Number(x) || 0` semantics
pub(crate) fn num(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(0.0)
            }
        }
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Like [`num`], but keeps the difference between "absent" and "zero"
pub(crate) fn opt_num(value: Option<&Value>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        v => Some(num(v)),
    }
}

pub(crate) fn count(value: Option<&Value>) -> u64 {
    num(value).max(0.0).round() as u64
}

pub(crate) fn text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn strings(value: Option<&Value>) -> Option<Vec<String>> {
    value.and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    })
}

fn array(value: Option<&Value>) -> &[Value] {
    value.and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

fn cluster_id(value: Option<&Value>) -> ClusterId {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                ClusterId::Int(i)
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => ClusterId::Int(f as i64),
                    _ => ClusterId::Text(n.to_string()),
                }
            }
        }
        Some(Value::String(s)) => ClusterId::Text(s.clone()),
        None | Some(Value::Null) => ClusterId::default(),
        Some(other) => ClusterId::Text(other.to_string()),
    }
}

// =============================================================================
// Sections
// =============================================================================

fn decode_keyword(item: &Value) -> Option<Keyword> {
    let obj = item.as_object()?;
    Some(Keyword {
        token: text(obj.get("token")).unwrap_or_default(),
        count: count(obj.get("count")),
    })
}

/// `[{token,count}]` or `{list:[...], suggestions, unique, top}`
pub fn decode_keywords(value: Option<&Value>) -> Keywords {
    match value {
        Some(Value::Array(items)) => Keywords {
            list: items.iter().filter_map(decode_keyword).collect(),
            ..Keywords::default()
        },
        Some(Value::Object(obj)) => Keywords {
            list: array(obj.get("list")).iter().filter_map(decode_keyword).collect(),
            suggestions: strings(obj.get("suggestions")),
            unique: opt_num(obj.get("unique")).map(|n| n.max(0.0).round() as u64),
            top: text(obj.get("top")),
        },
        _ => Keywords::default(),
    }
}

fn decode_point(item: &Value) -> Option<ThemePoint> {
    let obj = item.as_object()?;
    Some(ThemePoint {
        label: text(obj.get("label"))
            .or_else(|| text(obj.get("word")))
            .unwrap_or_default(),
        x: num(obj.get("x")),
        y: num(obj.get("y")),
        // Legacy payloads omit count; they plotted every point at unit weight
        count: match obj.get("count") {
            None | Some(Value::Null) => 1,
            c => count(c),
        },
        cluster: cluster_id(obj.get("cluster")),
    })
}

fn decode_cluster(index: usize, item: &Value) -> Option<Cluster> {
    let obj = item.as_object()?;
    Some(Cluster {
        id: cluster_id(obj.get("id")),
        label: text(obj.get("label")).unwrap_or_else(|| format!("Cluster {}", index + 1)),
    })
}

/// `{points, clusters, suggestions}`; legacy `{clusters: <count>, data: [...]}`
pub fn decode_themes(value: Option<&Value>) -> Themes {
    let Some(obj) = value.and_then(Value::as_object) else {
        return Themes::default();
    };

    let points = match obj.get("points") {
        Some(Value::Array(items)) => items.as_slice(),
        _ => array(obj.get("data")),
    };

    Themes {
        points: points.iter().filter_map(decode_point).collect(),
        clusters: array(obj.get("clusters"))
            .iter()
            .enumerate()
            .filter_map(|(i, c)| decode_cluster(i, c))
            .collect(),
        suggestions: strings(obj.get("suggestions")),
    }
}

fn decode_section(item: &Value) -> Option<SentimentSection> {
    let obj = item.as_object()?;
    Some(SentimentSection {
        pos: num(obj.get("pos")),
        neu: num(obj.get("neu")),
        neg: num(obj.get("neg")),
    })
}

/// Breakdown and/or polarity object; a bare number is a polarity
pub fn decode_sentiment(value: Option<&Value>) -> Sentiment {
    match value {
        Some(Value::Number(_)) | Some(Value::String(_)) => Sentiment {
            polarity: opt_num(value),
            ..Sentiment::default()
        },
        Some(Value::Object(obj)) => {
            let field = |name: &str, legacy: &str| {
                opt_num(obj.get(name)).or_else(|| opt_num(obj.get(legacy)))
            };
            Sentiment {
                positive: field("positive", "pos"),
                negative: field("negative", "neg"),
                neutral: field("neutral", "neu"),
                polarity: opt_num(obj.get("polarity")),
                subjectivity: opt_num(obj.get("subjectivity")),
                timeline: array(obj.get("timeline")).iter().filter_map(decode_section).collect(),
                suggestions: strings(obj.get("suggestions")),
            }
        }
        _ => Sentiment::default(),
    }
}

fn breakdown_from(obj: &Map<String, Value>, skip_meta: bool) -> EmotionBreakdown {
    obj.iter()
        .filter(|(k, _)| !(skip_meta && EMOTION_META_KEYS.contains(&k.as_str())))
        .map(|(k, v)| (k.as_str(), num(Some(v))))
        .collect()
}

/// `{breakdown, dominant}`, legacy `{distribution, dominant}`, or the bare mapping
pub fn decode_emotions(value: Option<&Value>) -> Emotions {
    let Some(obj) = value.and_then(Value::as_object) else {
        return Emotions::default();
    };

    let breakdown = match (obj.get("breakdown"), obj.get("distribution")) {
        (Some(Value::Object(inner)), _) => breakdown_from(inner, false),
        (Some(v), _) if !v.is_null() => EmotionBreakdown::new(),
        (_, Some(Value::Object(inner))) => breakdown_from(inner, false),
        _ => breakdown_from(obj, true),
    };

    Emotions {
        breakdown,
        dominant: text(obj.get("dominant")),
        suggestions: strings(obj.get("suggestions")),
    }
}

fn decode_keyness_entry(item: &Value) -> Option<KeynessEntry> {
    let obj = item.as_object()?;
    let score = ["score", "keyness", "count"]
        .iter()
        .map(|k| num(obj.get(*k)))
        .find(|s| *s != 0.0)
        .unwrap_or(0.0);
    Some(KeynessEntry {
        token: text(obj.get("token")).unwrap_or_default(),
        score,
    })
}

pub fn decode_keyness(value: Option<&Value>) -> Keyness {
    let items = match value {
        Some(Value::Array(items)) => items.as_slice(),
        Some(Value::Object(obj)) => array(obj.get("list")),
        _ => &[],
    };
    Keyness {
        list: items.iter().filter_map(decode_keyness_entry).collect(),
    }
}

// =============================================================================
// Report
// =============================================================================

/// Decode any JSON value into a [`Report`]. Never fails.
pub fn decode_report(raw: &Value) -> Report {
    let field = |name: &str| raw.as_object().and_then(|o| o.get(name));

    Report {
        readability: num(field("readability")),
        keywords: decode_keywords(field("keywords")),
        themes: decode_themes(field("themes")),
        sentiment: decode_sentiment(field("sentiment")),
        emotions: decode_emotions(field("emotions")),
        keyness: decode_keyness(field("keyness")),
        summary: text(field("summary")),
    }
}
