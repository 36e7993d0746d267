//! Persisted client state
//!
//! Single owner of every browser storage key the dashboard touches.
//! Components never read `localStorage`/`sessionStorage` directly; they go
//! through [`ClientState`] and get typed values back.

use serde::Serialize;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::DashboardError;
use crate::log::{console_log, console_warn};
use crate::report::decode::{count, text};
use crate::report::Report;

// =============================================================================
// Keys
// =============================================================================

/// Raw uploaded document text (local)
pub const KEY_SOURCE_TEXT: &str = "ink_text";
/// `{name, words}` for the uploaded file (local)
pub const KEY_UPLOAD_META: &str = "ink_report_meta";
/// Cached analysis report (local)
pub const KEY_REPORT: &str = "ink_report";
/// Report key used by older upload flows (local, read-only fallback)
pub const KEY_LEGACY_REPORT: &str = "ink_results";
/// Marks this tab's session as already entered (session)
pub const KEY_SESSION_ACTIVE: &str = "ink_session_active";
/// Set by the export preview tab so it keeps the data (session)
pub const KEY_FROM_PREVIEW: &str = "fromPreview";

/// Everything removed by a delete or a privacy wipe
pub const REPORT_KEYS: &[&str] = &[KEY_SOURCE_TEXT, KEY_UPLOAD_META, KEY_REPORT, KEY_LEGACY_REPORT];

// =============================================================================
// Storage backends
// =============================================================================

/// String key-value storage (browser Storage or in-memory)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), DashboardError>;
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DashboardError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store for host builds and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DashboardError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// `window.localStorage` / `window.sessionStorage`
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn local() -> Result<Self, DashboardError> {
        let storage = Self::window()?
            .local_storage()
            .map_err(|e| DashboardError::Storage(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| DashboardError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }

    pub fn session() -> Result<Self, DashboardError> {
        let storage = Self::window()?
            .session_storage()
            .map_err(|e| DashboardError::Storage(format!("sessionStorage unavailable: {:?}", e)))?
            .ok_or_else(|| DashboardError::Storage("sessionStorage unavailable".into()))?;
        Ok(Self { storage })
    }

    fn window() -> Result<web_sys::Window, DashboardError> {
        web_sys::window().ok_or_else(|| DashboardError::Storage("no window".into()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DashboardError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| DashboardError::Storage(format!("Failed to write {}: {:?}", key, e)))
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

// =============================================================================
// Typed values
// =============================================================================

/// Upload badge metadata written by the upload page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UploadMeta {
    pub name: Option<String>,
    pub words: u64,
}

impl UploadMeta {
    /// Field by field, so a bad `words` never costs the file name
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: text(value.get("name")).filter(|n| !n.is_empty()),
            words: count(value.get("words")),
        }
    }
}

/// Outcome of reading the cached report
#[derive(Debug, Clone, PartialEq)]
pub enum CacheRead {
    Hit(Report),
    Miss,
    /// Entry exists but is not valid JSON
    Malformed(String),
}

// =============================================================================
// ClientState
// =============================================================================

/// Typed access to persisted dashboard state.
///
/// Carries a generation counter that advances whenever report data is
/// cleared. Background writes tagged with an older generation are refused,
/// so a late response cannot resurrect deleted data.
pub struct ClientState {
    local: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
    generation: Cell<u64>,
}

impl ClientState {
    pub fn new(local: Box<dyn KeyValueStore>, session: Box<dyn KeyValueStore>) -> Self {
        Self {
            local,
            session,
            generation: Cell::new(0),
        }
    }

    /// Backed by the browser's local and session storage
    pub fn browser() -> Result<Self, DashboardError> {
        Ok(Self::new(
            Box::new(BrowserStore::local()?),
            Box::new(BrowserStore::session()?),
        ))
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
    }

    // ---- source text -------------------------------------------------------

    /// Uploaded document text; empty text counts as absent
    pub fn source_text(&self) -> Option<String> {
        self.local.get(KEY_SOURCE_TEXT).filter(|t| !t.is_empty())
    }

    pub fn set_source_text(&self, text: &str) -> Result<(), DashboardError> {
        self.local.set(KEY_SOURCE_TEXT, text)
    }

    // ---- upload metadata ---------------------------------------------------

    pub fn upload_meta(&self) -> UploadMeta {
        self.local
            .get(KEY_UPLOAD_META)
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
            .map(|value| UploadMeta::from_value(&value))
            .unwrap_or_default()
    }

    pub fn set_upload_meta(&self, meta: &UploadMeta) -> Result<(), DashboardError> {
        let json = serde_json::to_string(meta)?;
        self.local.set(KEY_UPLOAD_META, &json)
    }

    // ---- cached report -----------------------------------------------------

    pub fn read_report(&self) -> CacheRead {
        let raw = self
            .local
            .get(KEY_REPORT)
            .or_else(|| self.local.get(KEY_LEGACY_REPORT));

        match raw {
            None => CacheRead::Miss,
            Some(json) => match Report::from_json_str(&json) {
                Ok(report) => CacheRead::Hit(report),
                Err(e) => CacheRead::Malformed(e.to_string()),
            },
        }
    }

    pub fn write_report(&self, report: &Report) -> Result<(), DashboardError> {
        let json = report.to_json()?;
        self.local.set(KEY_REPORT, &json)
    }

    /// Drop an unreadable cache entry without touching anything else
    pub fn discard_report(&self) {
        self.local.remove(KEY_REPORT);
        self.local.remove(KEY_LEGACY_REPORT);
    }

    /// Write a refreshed report only if no clear happened since `generation`
    pub fn commit_report(&self, generation: u64, report: &Report) -> Result<bool, DashboardError> {
        if generation != self.generation.get() {
            return Ok(false);
        }
        self.write_report(report)?;
        Ok(true)
    }

    // ---- lifecycle ---------------------------------------------------------

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn has_report_data(&self) -> bool {
        REPORT_KEYS.iter().any(|k| self.local.get(k).is_some())
    }

    /// Remove all report data and invalidate in-flight refreshes
    pub fn clear_report_data(&self) {
        for key in REPORT_KEYS {
            self.local.remove(key);
        }
        self.generation.set(self.generation.get() + 1);
    }

    pub fn session_active(&self) -> bool {
        self.session.get(KEY_SESSION_ACTIVE).as_deref() == Some("1")
    }

    pub fn from_preview(&self) -> bool {
        self.session.get(KEY_FROM_PREVIEW).as_deref() == Some("true")
    }

    /// Flag the next dashboard entry as coming from the export preview
    pub fn mark_from_preview(&self) -> Result<(), DashboardError> {
        self.session.set(KEY_FROM_PREVIEW, "true")
    }

    /// Run on every dashboard entry, before anything else reads state.
    ///
    /// A fresh browser session that did not come from the export preview
    /// wipes all report data. Returns true when a wipe happened.
    pub fn enter_dashboard(&self) -> Result<bool, DashboardError> {
        let wipe = !self.session_active() && !self.from_preview();
        if wipe {
            self.clear_report_data();
            console_log!("[ClientState] New session: local report data cleared");
        }

        self.session.set(KEY_SESSION_ACTIVE, "1")?;
        self.session.remove(KEY_FROM_PREVIEW);
        Ok(wipe)
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Log-and-continue for storage writes the view can live without
pub(crate) fn warn_on_err(result: Result<(), DashboardError>, context: &str) {
    if let Err(e) = result {
        console_warn!("[ClientState] {}: {}", context, e);
    }
}
