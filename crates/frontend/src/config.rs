//! Loads [`UiConfig`] from the page once and caches it.

use contracts::shared::config::{UiConfig, CONFIG_ELEMENT_ID};
use once_cell::sync::OnceCell;

static CONFIG: OnceCell<UiConfig> = OnceCell::new();

/// Page configuration; defaults when the page has no `#ui-config` block.
pub fn ui_config() -> &'static UiConfig {
    CONFIG.get_or_init(load_from_page)
}

fn load_from_page() -> UiConfig {
    let Some(json) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return UiConfig::default();
    };

    match UiConfig::from_json(&json) {
        Ok(config) => {
            log::debug!("Loaded page config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
            UiConfig::default()
        }
    }
}
