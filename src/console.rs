/// Log a warning message to the browser console.
///
/// Used for non-fatal browser errors the app recovers from on its own.
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&format!("UPA: {msg}").into());
}

/// Log a diagnostic message, debug builds only.
pub fn debug(msg: &str) {
    if cfg!(debug_assertions) {
        web_sys::console::debug_1(&format!("UPA: {msg}").into());
    }
}
