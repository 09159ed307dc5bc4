/// Blocking yes/no prompt. A missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Runs `callback` only when the user confirms.
pub fn confirm_action<F: FnOnce()>(message: &str, callback: F) {
    if confirm(message) {
        callback();
    }
}
