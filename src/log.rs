//! Browser console logging
//!
//! `web_sys::console` calls only exist on wasm32. Host builds (unit tests)
//! compile the macros down to nothing so core logic stays testable.

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_msg: &str) {}

macro_rules! console_log {
    ($($arg:tt)*) => { $crate::log::log(&format!($($arg)*)) };
}

macro_rules! console_warn {
    ($($arg:tt)*) => { $crate::log::warn(&format!($($arg)*)) };
}

macro_rules! console_error {
    ($($arg:tt)*) => { $crate::log::error(&format!($($arg)*)) };
}

pub(crate) use console_error;
pub(crate) use console_log;
pub(crate) use console_warn;
