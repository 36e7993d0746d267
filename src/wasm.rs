use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::cache::ReportCache;
use crate::chart::ChartBundle;
use crate::client::FetchClient;
use crate::config::DashboardConfig;
use crate::report::{normalize_raw, normalize_value};
use crate::sentiment::SentimentMix;
use crate::state::ClientState;
use crate::view::DashboardView;

/// Plain JS objects/arrays instead of `Map`s
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js_value(raw: JsValue) -> Result<Value, JsValue> {
    if raw.is_undefined() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(raw)
        .map_err(|e| JsValue::from_str(&format!("Invalid report input: {}", e)))
}

fn config_from_js(config: JsValue) -> Result<DashboardConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(DashboardConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))
}

/// Dashboard controller bound to browser storage and `fetch()`
///
/// # Example (JavaScript)
/// ```javascript,ignore
/// const dash = new InkDashboard({ endpoint: "http://127.0.0.1:8000/analyze" });
/// try {
///   const view = dash.load();      // cached data, refresh runs in background
///   if (view.report) renderCharts(view.charts);
/// } catch (e) {
///   showPrompt(e);                 // no uploaded text
/// }
/// ```
#[wasm_bindgen]
pub struct InkDashboard {
    cache: Rc<ReportCache<FetchClient>>,
}

#[wasm_bindgen]
impl InkDashboard {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<InkDashboard, JsValue> {
        let config = config_from_js(config)?;
        let state = Rc::new(ClientState::browser()?);
        let client = FetchClient::new(config.endpoint.clone());
        Ok(InkDashboard {
            cache: Rc::new(ReportCache::new(state, client, config)),
        })
    }

    /// Apply the privacy wipe rule. Returns true if data was wiped.
    ///
    /// `load()` does this on its own; calling it first only lets the page
    /// learn whether a wipe happened.
    #[wasm_bindgen(js_name = enterDashboard)]
    pub fn enter_dashboard(&self) -> Result<bool, JsValue> {
        Ok(self.cache.enter()?)
    }

    /// Build the view from cached data and start a background refresh
    #[wasm_bindgen]
    pub fn load(&self) -> Result<JsValue, JsValue> {
        let load = self.cache.open()?;
        let view = DashboardView::build(&load, self.cache.config());

        let cache = Rc::clone(&self.cache);
        let ticket = load.ticket;
        spawn_local(async move {
            let _ = cache.refresh(ticket).await;
        });

        to_js(&view)
    }

    #[wasm_bindgen(js_name = deleteReport)]
    pub fn delete_report(&self) {
        self.cache.delete_report();
    }

    #[wasm_bindgen(js_name = hasReportData)]
    pub fn has_report_data(&self) -> bool {
        self.cache.state().has_report_data()
    }

    #[wasm_bindgen(js_name = markFromPreview)]
    pub fn mark_from_preview(&self) -> Result<(), JsValue> {
        Ok(self.cache.state().mark_from_preview()?)
    }
}

/// Canonical report from any backend payload
#[wasm_bindgen(js_name = normalizeReport)]
pub fn normalize_report(raw: JsValue) -> Result<JsValue, JsValue> {
    to_js(&normalize_value(&from_js_value(raw)?))
}

/// `[positive, neutral, negative]` percentages
#[wasm_bindgen(js_name = sentimentPercentages)]
pub fn sentiment_percentages(sentiment: JsValue, neutral_weight: Option<f64>) -> Result<Vec<f64>, JsValue> {
    let raw = from_js_value(sentiment)?;
    let weight = neutral_weight.unwrap_or(DashboardConfig::default().neutral_weight);
    Ok(SentimentMix::derive_raw(&raw, weight).as_array().to_vec())
}

/// Chart data for every chart, from a raw or canonical report
#[wasm_bindgen(js_name = chartData)]
pub fn chart_data(raw: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let report = normalize_raw(&from_js_value(raw)?);
    to_js(&ChartBundle::from_report(&report, &config))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_sentiment_percentages_binding() {
        let input = to_js(&json!({ "positive": 3, "negative": 1, "neutral": 1 })).unwrap();
        let mix = sentiment_percentages(input, None).unwrap();
        assert_eq!(mix, vec![65.2, 13.0, 21.7]);
    }

    #[wasm_bindgen_test]
    fn test_normalize_report_binding() {
        let input = to_js(&json!({ "emotions": { "joy": 1 } })).unwrap();
        let output: Value = serde_wasm_bindgen::from_value(normalize_report(input).unwrap()).unwrap();
        assert_eq!(output["emotions"]["breakdown"]["joy"].as_f64(), Some(1.0));
        assert_eq!(output["themes"]["points"], json!([]));
    }
}
