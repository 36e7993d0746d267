//! Configuration types and defaults for the dashboard core
//!
//! Every presentation tuning constant lives here as a named field so the
//! browser side can override it without touching the adapters.

use serde::{Deserialize, Serialize};

/// Local development backend
pub const LOCAL_ENDPOINT: &str = "http://127.0.0.1:8000/analyze";

/// Hosted backend
pub const HOSTED_ENDPOINT: &str = "https://ink-insights-backend.onrender.com/analyze";

// =============================================================================
// Main Configuration
// =============================================================================

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Remote analysis endpoint (POST). Default: local backend
    pub endpoint: String,
    /// Filename sent when no upload metadata exists. Default: "document.txt"
    pub default_filename: String,
    /// Weight applied to the neutral component before normalizing. Default: 0.6
    pub neutral_weight: f64,
    /// Multiplier from theme point count to bubble radius. Default: 1.5
    pub bubble_radius_scale: f64,
    /// Smallest bubble radius. Default: 3.0
    pub bubble_radius_min: f64,
    /// Largest bubble radius. Default: 12.0
    pub bubble_radius_max: f64,
    /// Radius of points in the implicit "Semantic Points" series. Default: 6.0
    pub implicit_point_radius: f64,
    /// Bars in the keyword chart. Default: 10
    pub top_keywords: usize,
    /// Bars in the keyness chart. Default: 10
    pub top_keyness: usize,
    /// Keywords listed in the summary panel. Default: 3
    pub summary_keywords: usize,
    /// Reading speed used for the reading-time badge. Default: 200
    pub words_per_minute: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: LOCAL_ENDPOINT.to_string(),
            default_filename: "document.txt".to_string(),
            neutral_weight: 0.6,
            bubble_radius_scale: 1.5,
            bubble_radius_min: 3.0,
            bubble_radius_max: 12.0,
            implicit_point_radius: 6.0,
            top_keywords: 10,
            top_keyness: 10,
            summary_keywords: 3,
            words_per_minute: 200,
        }
    }
}

impl DashboardConfig {
    /// Local development configuration
    pub fn local() -> Self {
        Self::default()
    }

    /// Configuration pointed at the hosted backend
    pub fn hosted() -> Self {
        Self::default().with_endpoint(HOSTED_ENDPOINT)
    }

    /// Same tuning, different endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Bubble radius for a theme point with the given count
    pub fn bubble_radius(&self, count: f64) -> f64 {
        (count * self.bubble_radius_scale).clamp(self.bubble_radius_min, self.bubble_radius_max)
    }
}
