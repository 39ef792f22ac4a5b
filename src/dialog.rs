//! Blocking Dialogs
//!
//! Thin wrappers over the browser's modal confirm/alert.

/// Ask the user a yes/no question
///
/// `false` when the dialog is unavailable.
pub fn confirm(message: &str) -> bool {
    match web_sys::window() {
        Some(window) => window.confirm_with_message(message).unwrap_or(false),
        None => false,
    }
}

/// Show a blocking message
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
