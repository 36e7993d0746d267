//! InkCore: report normalization, caching and chart shaping
//!
//! A Rust/WASM implementation of the Ink Insights dashboard core.
//!
//! # Architecture
//!
//! ## Data flow
//! ```text
//! ClientState → ReportCache → decode/normalize → SentimentMix + chart adapters → view
//!                    ↓ (background)
//!              AnalysisClient (POST /analyze) → ClientState (next load)
//! ```
//!
//! ## Components
//! - `state.rs` - ClientState: typed owner of local/session storage keys
//! - `report/` - Canonical Report model, tolerant decoding, normalization
//! - `sentiment.rs` - SentimentMix: Positive/Neutral/Negative percentages
//! - `cache.rs` - ReportCache: stale-while-revalidate with generation guard
//! - `client.rs` - AnalysisClient: `fetch()` transport to the backend
//! - `chart.rs` - Chart data adapters and the non-zero "has data" rule
//! - `summary.rs` - Summary panel, document badge, default suggestions
//! - `view.rs` - DashboardView: everything the page paints
//! - `config.rs` - DashboardConfig: tuning constants and endpoint
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { InkDashboard, sentimentPercentages } from 'inkcore';
//!
//! await init();
//!
//! const dash = new InkDashboard();
//! const view = dash.load();         // privacy wipe on a fresh session, cached report now,
//!                                   // refresh in background
//!
//! console.log(view.summary);        // readability, sentiment mix, top keywords
//! console.log(view.charts.themes);  // { state: "ready", data: [...] } or { state: "placeholder" }
//!
//! sentimentPercentages({ positive: 3, negative: 1, neutral: 1 }); // [65.2, 13, 21.7]
//! ```

pub mod cache;
pub mod chart;
pub mod client;
pub mod config;
pub mod error;
mod log;
pub mod report;
pub mod sentiment;
pub mod state;
pub mod summary;
pub mod view;
pub mod wasm;

pub use cache::{DashboardLoad, RefreshOutcome, RefreshTicket, ReportCache};
pub use chart::*;
pub use client::{AnalysisClient, AnalyzeRequest, FetchClient};
pub use config::DashboardConfig;
pub use error::DashboardError;
pub use report::{decode_report, normalize, normalize_raw, normalize_value, Report};
pub use sentiment::SentimentMix;
pub use state::{BrowserStore, CacheRead, ClientState, KeyValueStore, MemoryStore, UploadMeta};
pub use summary::{DocumentBadge, ReportSummary, Suggestions};
pub use view::DashboardView;
pub use wasm::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("inkcore v{}", env!("CARGO_PKG_VERSION"))
}
