//! Loading overlay and toast notifications.
//!
//! `UiService` owns the reactive [`UiState`]; [`UiHost`] renders it. The
//! page-wide service is created on first use, so toasts raised before the
//! host is mounted are kept and shown once it is.

mod host;

pub use host::UiHost;

use contracts::shared::ui_state::{ToastKind, UiState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use once_cell::sync::OnceCell;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::config::ui_config;

/// Time the fade-out transition gets before a toast is removed.
const TOAST_FADE_MS: u32 = 600;

static SERVICE: OnceCell<UiService> = OnceCell::new();

/// Anything that can put a toast in front of the user.
pub trait Notifier {
    fn notify(&self, message: &str, kind: ToastKind);
}

#[derive(Clone, Copy)]
pub struct UiService {
    state: RwSignal<UiState>,
}

impl UiService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(UiState::new()),
        }
    }

    pub(crate) fn state(&self) -> RwSignal<UiState> {
        self.state
    }

    pub fn show_loading(&self, message: &str) {
        self.state.update(|s| s.show_overlay(message));
    }

    pub fn hide_loading(&self) {
        self.state.update(|s| {
            s.hide_overlay();
        });
    }

    /// Shows a toast that fades out and removes itself after the configured
    /// lifetime.
    pub fn show_toast(&self, message: &str, kind: ToastKind) -> Uuid {
        let id = self.push_toast(message, kind);

        let svc = *self;
        let toast_ms = ui_config().toast_ms;
        spawn_local(async move {
            TimeoutFuture::new(toast_ms).await;
            svc.state.update(|s| {
                s.fade_toast(id);
            });
            TimeoutFuture::new(TOAST_FADE_MS).await;
            svc.dismiss_toast(id);
        });

        id
    }

    /// Adds a toast without scheduling its removal.
    pub fn push_toast(&self, message: &str, kind: ToastKind) -> Uuid {
        self.state
            .try_update(|s| s.push_toast(message, kind))
            .unwrap_or_else(Uuid::nil)
    }

    pub fn dismiss_toast(&self, id: Uuid) {
        self.state.update(|s| {
            s.dismiss_toast(id);
        });
    }
}

impl Notifier for UiService {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.show_toast(message, kind);
    }
}

impl Default for UiService {
    fn default() -> Self {
        Self::new()
    }
}

/// The page-wide service, created on first use.
pub fn ui_service() -> UiService {
    *SERVICE.get_or_init(UiService::new)
}

/// Routes toasts to the page-wide service.
pub struct PageNotifier;

impl Notifier for PageNotifier {
    fn notify(&self, message: &str, kind: ToastKind) {
        ui_service().notify(message, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_raised_before_mount_are_kept() {
        let id = ui_service().push_toast("An error occurred: Not Found", ToastKind::Error);

        let toasts = ui_service().state().with_untracked(|s| s.toasts().to_vec());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, id);
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }
}
