//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API and reports the outcome with a toast.

use contracts::shared::ui_state::ToastKind;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::ui_service::{Notifier, PageNotifier};
use crate::error::UiError;
use crate::shared::dom;

/// Writes `text` to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), UiError> {
    let clipboard = dom::window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(UiError::js)?;
    Ok(())
}

/// Copy text to the system clipboard
///
/// Shows "Copied to clipboard!" on success and "Failed to copy" otherwise.
///
/// # Example
/// ```rust,ignore
/// copy_to_clipboard("254712345678");
/// ```
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        match write_text(&text).await {
            Ok(()) => PageNotifier.notify("Copied to clipboard!", ToastKind::Success),
            Err(e) => {
                log::warn!("Clipboard write failed: {}", e);
                PageNotifier.notify("Failed to copy", ToastKind::Error);
            }
        }
    });
}
