//! Report cache controller
//!
//! Stale-while-revalidate over the persisted report:
//! 1. `open()` applies the session wipe rule on first use, then serves the
//!    cached report (if any) immediately
//! 2. `refresh()` asks the backend for a fresh analysis in the background
//!    and replaces the cache for the next page load
//!
//! Refresh failures are logged and swallowed; the cached report stays
//! authoritative. Each refresh carries the state generation it was issued
//! under, so a response landing after a delete is dropped.

use std::cell::Cell;
use std::rc::Rc;

use crate::client::{AnalysisClient, AnalyzeRequest};
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::log::{console_error, console_log, console_warn};
use crate::report::{normalize_raw, Report};
use crate::state::{warn_on_err, CacheRead, ClientState, UploadMeta};

/// A pending background refresh
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshTicket {
    pub generation: u64,
    pub request: AnalyzeRequest,
}

/// What the dashboard has to work with right after load
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLoad {
    /// Cached report, normalized. None means render placeholders only.
    pub report: Option<Report>,
    pub meta: UploadMeta,
    pub source_text: String,
    pub ticket: RefreshTicket,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// Fresh report persisted for the next load
    Stored(Report),
    /// Report data was cleared while the request was in flight
    Stale,
    Failed(DashboardError),
}

pub struct ReportCache<C> {
    state: Rc<ClientState>,
    client: C,
    config: DashboardConfig,
    entered: Cell<bool>,
}

impl<C: AnalysisClient> ReportCache<C> {
    pub fn new(state: Rc<ClientState>, client: C, config: DashboardConfig) -> Self {
        Self {
            state,
            client,
            config,
            entered: Cell::new(false),
        }
    }

    pub fn state(&self) -> &Rc<ClientState> {
        &self.state
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Dashboard entry: runs the privacy wipe once per controller.
    ///
    /// Returns true when report data was wiped.
    pub fn enter(&self) -> Result<bool, DashboardError> {
        if self.entered.get() {
            return Ok(false);
        }
        let wiped = self.state.enter_dashboard()?;
        self.entered.set(true);
        Ok(wiped)
    }

    /// Load the cached report without waiting on the network.
    ///
    /// Fails only when there is no uploaded text at all; the caller is
    /// expected to send the user back to the upload step.
    pub fn open(&self) -> Result<DashboardLoad, DashboardError> {
        self.enter()?;
        let source_text = self.state.source_text().ok_or(DashboardError::MissingSourceText)?;
        let meta = self.state.upload_meta();

        let report = match self.state.read_report() {
            CacheRead::Hit(report) => {
                console_log!("[ReportCache] Loaded cached report");
                warn_on_err(self.state.write_report(&report), "Failed to persist normalized report");
                Some(report)
            }
            CacheRead::Miss => None,
            CacheRead::Malformed(reason) => {
                console_warn!("[ReportCache] Invalid cached report, ignoring: {}", reason);
                self.state.discard_report();
                None
            }
        };

        let filename = meta
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.config.default_filename.clone());

        let ticket = RefreshTicket {
            generation: self.state.generation(),
            request: AnalyzeRequest {
                text: source_text.clone(),
                filename,
            },
        };

        Ok(DashboardLoad { report, meta, source_text, ticket })
    }

    /// Fetch a fresh analysis and persist it if the ticket is still current.
    ///
    /// Never propagates errors; the outcome is for logging and tests.
    pub async fn refresh(&self, ticket: RefreshTicket) -> RefreshOutcome {
        console_log!("[ReportCache] Checking backend for fresher analysis...");

        let raw = match self.client.analyze(&ticket.request).await {
            Ok(raw) => raw,
            Err(e) => {
                console_warn!("[ReportCache] Backend not reachable, using cached report only: {}", e);
                return RefreshOutcome::Failed(e);
            }
        };

        let report = normalize_raw(&raw);
        match self.state.commit_report(ticket.generation, &report) {
            Ok(true) => {
                console_log!("[ReportCache] Updated analysis cached for next load");
                RefreshOutcome::Stored(report)
            }
            Ok(false) => {
                console_log!("[ReportCache] Report deleted during refresh, response dropped");
                RefreshOutcome::Stale
            }
            Err(e) => {
                console_error!("[ReportCache] Failed to cache refreshed report: {}", e);
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// Explicit user delete
    pub fn delete_report(&self) {
        self.state.clear_report_data();
        console_log!("[ReportCache] Report data deleted");
    }
}
