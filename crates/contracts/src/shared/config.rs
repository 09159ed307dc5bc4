//! Page-level settings for the UI helpers.
//!
//! A page can override any field with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="ui-config">{"toast_ms": 4000}</script>
//! ```

use serde::{Deserialize, Serialize};

use super::csv_export::DEFAULT_EXPORT_FILENAME;
use super::format::DEFAULT_CURRENCY;

/// Element id of the inline config block.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub sidebar: String,
    pub sidebar_toggle: String,
    pub alert: String,
    pub confirm_delete: String,
    pub format_currency: String,
    pub datatable: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            sidebar: "#sidebar".into(),
            sidebar_toggle: "#sidebarToggle".into(),
            alert: ".alert".into(),
            confirm_delete: ".confirm-delete".into(),
            format_currency: ".format-currency".into(),
            datatable: ".datatable".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub currency: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub toast_ms: u32,
    pub alert_fade_ms: u32,
    pub page_length: i32,
    pub export_filename: String,
    pub delete_confirm_message: String,
    pub selectors: Selectors,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.into(),
            csrf_cookie: "csrftoken".into(),
            csrf_header: "X-CSRFToken".into(),
            toast_ms: 3000,
            alert_fade_ms: 5000,
            page_length: 25,
            export_filename: DEFAULT_EXPORT_FILENAME.into(),
            delete_confirm_message: "Are you sure you want to delete this item?".into(),
            selectors: Selectors::default(),
        }
    }
}

impl UiConfig {
    /// Parses the inline JSON block; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.currency, "KES");
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.toast_ms, 3000);
        assert_eq!(config.alert_fade_ms, 5000);
        assert_eq!(config.page_length, 25);
        assert_eq!(config.export_filename, "export.csv");
        assert_eq!(config.selectors.datatable, ".datatable");
    }

    #[test]
    fn test_partial_override() {
        let config =
            UiConfig::from_json(r##"{"toast_ms": 4000, "selectors": {"sidebar": "#nav"}}"##).unwrap();
        assert_eq!(config.toast_ms, 4000);
        assert_eq!(config.selectors.sidebar, "#nav");
        assert_eq!(config.selectors.sidebar_toggle, "#sidebarToggle");
        assert_eq!(config.currency, "KES");
    }

    #[test]
    fn test_malformed_json() {
        assert!(UiConfig::from_json("{not json").is_err());
        assert_eq!(UiConfig::from_json("{}").unwrap(), UiConfig::default());
    }
}
