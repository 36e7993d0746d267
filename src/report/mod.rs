//! Analysis report: canonical model, tolerant decoding, normalization
//!
//! ```text
//! raw JSON (any backend version) → decode_report → normalize → Report
//! ```

pub mod decode;
pub mod model;
pub mod normalize;

#[cfg(test)]
mod tests;

pub use decode::decode_report;
pub use model::*;
pub use normalize::{normalize, normalize_raw, normalize_value, synthesize_clusters};

use crate::error::DashboardError;

impl Report {
    /// Parse persisted/received JSON text into a canonical report.
    ///
    /// Only invalid JSON is an error; any well-formed value decodes.
    pub fn from_json_str(json: &str) -> Result<Report, DashboardError> {
        let raw: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| DashboardError::MalformedCache(e.to_string()))?;
        Ok(normalize_raw(&raw))
    }
}
