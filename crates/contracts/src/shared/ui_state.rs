//! State behind the loading overlay and the toast stack.
//!
//! At most one overlay exists; showing it again replaces the message.
//! Toasts are tracked by generated id so a timer or dismiss button removes
//! exactly the toast it belongs to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
    /// Fallback for kinds the page does not know about.
    Primary,
}

impl ToastKind {
    /// Maps a page-supplied kind; unknown values fall back to `Primary`.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            _ => Self::Primary,
        }
    }

    /// Background class of the toast body.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "bg-success",
            Self::Error => "bg-danger",
            Self::Warning => "bg-warning",
            Self::Info => "bg-info",
            Self::Primary => "bg-primary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    /// Set once the lifetime is over and the fade-out has started.
    pub fading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    overlay: Option<Overlay>,
    toasts: Vec<Toast>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn show_overlay(&mut self, message: impl Into<String>) {
        self.overlay = Some(Overlay {
            message: message.into(),
        });
    }

    /// Returns whether an overlay was showing.
    pub fn hide_overlay(&mut self) -> bool {
        self.overlay.take().is_some()
    }

    pub fn push_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            fading: false,
        });
        id
    }

    /// Starts the fade-out of a toast. Returns whether it was still present.
    pub fn fade_toast(&mut self, id: Uuid) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.fading = true;
                true
            }
            None => false,
        }
    }

    /// Returns whether the toast was still present.
    pub fn dismiss_toast(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_hide_overlay() {
        let mut state = UiState::new();
        state.show_overlay(DEFAULT_LOADING_MESSAGE);
        assert!(state.hide_overlay());
        assert!(state.overlay().is_none());
        assert!(!state.hide_overlay());
    }

    #[test]
    fn test_overlay_is_single_slot() {
        let mut state = UiState::new();
        state.show_overlay("Saving sale...");
        state.show_overlay("Generating report...");
        assert_eq!(state.overlay().map(|o| o.message.as_str()), Some("Generating report..."));
        state.hide_overlay();
        assert!(state.overlay().is_none());
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut state = UiState::new();
        let first = state.push_toast("Saved", ToastKind::Success);
        let second = state.push_toast("Low stock", ToastKind::Warning);
        assert_ne!(first, second);

        assert!(state.dismiss_toast(first));
        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts()[0].id, second);
        assert!(!state.dismiss_toast(first));
    }

    #[test]
    fn test_fade_marks_single_toast() {
        let mut state = UiState::new();
        let first = state.push_toast("Copied to clipboard!", ToastKind::Success);
        let second = state.push_toast("Failed to copy", ToastKind::Error);

        assert!(state.fade_toast(first));
        assert!(state.toasts()[0].fading);
        assert!(!state.toasts()[1].fading);

        state.dismiss_toast(second);
        assert!(!state.fade_toast(second));
    }

    #[test]
    fn test_toast_kind_mapping() {
        assert_eq!(ToastKind::parse("success").css_class(), "bg-success");
        assert_eq!(ToastKind::parse("error").css_class(), "bg-danger");
        assert_eq!(ToastKind::parse("warning").css_class(), "bg-warning");
        assert_eq!(ToastKind::parse("info").css_class(), "bg-info");
        assert_eq!(ToastKind::parse("fancy").css_class(), "bg-primary");
        assert_eq!(ToastKind::default(), ToastKind::Success);
    }
}
