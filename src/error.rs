//! Dashboard error types

use wasm_bindgen::JsValue;

/// Everything that can go wrong between storage, the backend and the view
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// No uploaded document text in persisted state
    MissingSourceText,
    /// fetch() rejected (offline, CORS, DNS...)
    Network(String),
    /// Backend answered with a non-2xx status
    Http { status: u16, message: String },
    /// Backend answered 2xx but the body is not JSON
    InvalidResponse(String),
    /// Persisted report could not be parsed
    MalformedCache(String),
    /// Storage unavailable or quota exceeded
    Storage(String),
    Serialization(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::MissingSourceText => {
                write!(f, "No text found. Please upload a .txt file first.")
            }
            DashboardError::Network(msg) => write!(f, "Network error: {}", msg),
            DashboardError::Http { status, message } => {
                write!(f, "HTTP {}: {}", status, message)
            }
            DashboardError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            DashboardError::MalformedCache(msg) => write!(f, "Malformed cached report: {}", msg),
            DashboardError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DashboardError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Serialization(e.to_string())
    }
}

impl From<DashboardError> for JsValue {
    fn from(e: DashboardError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

impl DashboardError {
    /// Build an HTTP error from a failed response body.
    ///
    /// The backend reports failures as `{ "error": "..." }`; anything else
    /// falls back to a generic status message.
    pub fn from_http_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| format!("Request failed ({})", status));
        DashboardError::Http { status, message }
    }
}
