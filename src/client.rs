//! Remote analysis endpoint client
//!
//! `POST /analyze` with `{ text, filename }`, answered by a report-shaped JSON
//! body or `{ error }` with a non-2xx status. No timeout, no retry.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::DashboardError;

/// Request body for the analysis endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub filename: String,
}

/// Transport to the analysis backend.
///
/// Returns the raw JSON body; decoding happens at the cache boundary.
#[allow(async_fn_in_trait)]
pub trait AnalysisClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<Value, DashboardError>;
}

/// Browser `fetch()` transport
#[derive(Debug, Clone)]
pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn js_err(e: wasm_bindgen::JsValue) -> DashboardError {
    DashboardError::Network(format!("{:?}", e))
}

impl AnalysisClient for FetchClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<Value, DashboardError> {
        let body = serde_json::to_string(request)?;

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_mode(web_sys::RequestMode::Cors);
        init.set_body(&wasm_bindgen::JsValue::from_str(&body));

        let req = web_sys::Request::new_with_str_and_init(&self.endpoint, &init).map_err(js_err)?;
        req.headers().set("Content-Type", "application/json").map_err(js_err)?;

        let window = web_sys::window().ok_or_else(|| DashboardError::Network("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req)).await.map_err(js_err)?;
        let resp: web_sys::Response = resp_value.dyn_into().map_err(js_err)?;

        let text_promise = resp.text().map_err(js_err)?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(js_err)?
            .as_string()
            .unwrap_or_default();

        read_response(resp.ok(), resp.status(), &text)
    }
}

/// Map a finished response to the report body or a typed error
fn read_response(ok: bool, status: u16, body: &str) -> Result<Value, DashboardError> {
    if !ok {
        return Err(DashboardError::from_http_body(status, body));
    }
    serde_json::from_str(body).map_err(|e| DashboardError::InvalidResponse(e.to_string()))
}
