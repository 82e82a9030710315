//! Blocking browser alert used for form submission feedback.

/// Show `message` in a `window.alert` dialog. Logged only outside the browser.
pub fn show(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    log::info!("alert: {message}");
}
