//! Page wiring done once the DOM is parsed.

use contracts::shared::config::UiConfig;
use contracts::shared::format::{format_currency_with, parse_float};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use crate::app::App;
use crate::config::ui_config;
use crate::shared::confirm::confirm;
use crate::shared::datatable::initialize_data_tables;
use crate::shared::dom;
use crate::shared::ui_service::ui_service;

/// Matches jQuery's "slow" fade.
const ALERT_FADE_MS: u32 = 600;

/// Runs `f` now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Ok(document) = dom::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let callback = Closure::once_into_js(f);
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log::error!("Failed to register DOMContentLoaded handler: {:?}", e);
    }
}

pub fn run() {
    let config = ui_config();

    let ui = ui_service();
    leptos::mount::mount_to_body(move || view! { <App ui=ui /> });

    let report = initialize_data_tables();
    log::debug!("DataTables: {:?}", report);

    wire_sidebar_toggle(config);
    schedule_alert_fade(config);
    wire_delete_confirmations(config);
    format_currency_elements(config);
}

fn wire_sidebar_toggle(config: &UiConfig) {
    for toggle in dom::select_all(&config.selectors.sidebar_toggle) {
        let sidebar_selector = config.selectors.sidebar.clone();
        let on_click = Closure::wrap(Box::new(move |_: Event| {
            for sidebar in dom::select_all(&sidebar_selector) {
                let _ = sidebar.class_list().toggle("show");
            }
        }) as Box<dyn FnMut(Event)>);

        let _ = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        // Lives as long as the page.
        on_click.forget();
    }
}

fn schedule_alert_fade(config: &UiConfig) {
    let delay = config.alert_fade_ms;
    let selector = config.selectors.alert.clone();
    spawn_local(async move {
        TimeoutFuture::new(delay).await;

        let alerts: Vec<web_sys::HtmlElement> = dom::select_all(&selector)
            .into_iter()
            .filter_map(|el| el.dyn_into().ok())
            .collect();
        for alert in &alerts {
            let style = alert.style();
            let _ = style.set_property("transition", &format!("opacity {}ms", ALERT_FADE_MS));
            let _ = style.set_property("opacity", "0");
        }

        TimeoutFuture::new(ALERT_FADE_MS).await;
        for alert in &alerts {
            let _ = alert.style().set_property("display", "none");
        }
    });
}

fn wire_delete_confirmations(config: &UiConfig) {
    for control in dom::select_all(&config.selectors.confirm_delete) {
        let message = config.delete_confirm_message.clone();
        let on_click = Closure::wrap(Box::new(move |e: Event| {
            if !confirm(&message) {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>);

        let _ =
            control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

fn format_currency_elements(config: &UiConfig) {
    for el in dom::select_all(&config.selectors.format_currency) {
        let value = parse_float(&el.text_content().unwrap_or_default());
        if !value.is_nan() {
            el.set_text_content(Some(&format_currency_with(&config.currency, value)));
        }
    }
}
