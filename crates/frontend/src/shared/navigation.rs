//! Imperative navigation helpers outside the router's reactive scope.

/// Go back in session history; the return path after a successful save.
pub fn previous_state() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

/// Ask before a destructive action; `false` outside a browser.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
