//! Functions the server-rendered templates call from inline handlers.
//!
//! Names follow the page's JavaScript conventions.

use contracts::shared::format::{format_currency_with, format_phone_number, parse_float};
use contracts::shared::ui_state::{ToastKind, DEFAULT_LOADING_MESSAGE};
use js_sys::{Function, Promise};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

use crate::config::ui_config;
use crate::error::UiError;
use crate::shared::api_utils::{ajax_request_with, AjaxRequest, Method, Payload};
use crate::shared::ui_service::{ui_service, Notifier, PageNotifier};
use crate::shared::{clipboard, confirm, cookies, datatable, export, forms, print};

#[wasm_bindgen(js_name = initializeDataTables)]
pub fn initialize_data_tables() {
    datatable::initialize_data_tables();
}

#[wasm_bindgen(js_name = reloadDataTable)]
pub fn reload_data_table(selector: &str) {
    if let Err(e) = datatable::reload_data_table(selector) {
        log::error!("Failed to reload DataTable {}: {}", selector, e);
    }
}

/// Accepts numbers and numeric strings; anything else formats as NaN.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: JsValue) -> String {
    let value = amount
        .as_f64()
        .or_else(|| amount.as_string().map(|s| parse_float(&s)))
        .unwrap_or(f64::NAN);
    format_currency_with(&ui_config().currency, value)
}

#[wasm_bindgen(js_name = formatPhoneNumber)]
pub fn format_phone(phone: &str) -> String {
    format_phone_number(phone)
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(message: Option<String>) {
    let message = message.unwrap_or_else(|| DEFAULT_LOADING_MESSAGE.to_string());
    ui_service().show_loading(&message);
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() {
    ui_service().hide_loading();
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    let kind = kind.map(|k| ToastKind::parse(&k)).unwrap_or_default();
    PageNotifier.notify(message, kind);
}

#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: &str, callback: &Function) {
    confirm::confirm_action(message, || {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            log::error!("confirmAction callback failed: {}", UiError::js(e));
        }
    });
}

#[wasm_bindgen(js_name = printElement)]
pub fn print_element(element_id: String) {
    spawn_local(async move {
        if let Err(e) = print::print_element(&element_id).await {
            log::error!("Failed to print #{}: {}", element_id, e);
            PageNotifier.notify("Failed to print", ToastKind::Error);
        }
    });
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: &str) {
    clipboard::copy_to_clipboard(text);
}

#[wasm_bindgen(js_name = exportTableToCSV)]
pub fn export_table_to_csv(table_id: &str, filename: Option<String>) {
    let filename = filename.unwrap_or_else(|| ui_config().export_filename.clone());
    if let Err(e) = export::export_table_to_csv(table_id, &filename) {
        log::error!("Failed to export #{}: {}", table_id, e);
        PageNotifier.notify("Failed to export table", ToastKind::Error);
    }
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str) -> bool {
    forms::validate_form(form_id)
}

/// `null` when the cookie is not set.
#[wasm_bindgen(js_name = getCookie)]
pub fn get_cookie(name: &str) -> JsValue {
    cookies::document_cookie(name)
        .map(JsValue::from)
        .unwrap_or(JsValue::NULL)
}

/// Sends a JSON request with the CSRF header.
///
/// The returned promise resolves with the parsed response, or with
/// `undefined` once a failure has gone to `onError` or the error toast.
/// Callbacks run before the promise settles.
#[wasm_bindgen(js_name = ajaxRequest)]
pub fn ajax_request_js(
    url: String,
    method: Option<String>,
    data: JsValue,
    on_success: Option<Function>,
    on_error: Option<Function>,
) -> Promise {
    let method = method.map(|m| Method::parse(&m)).unwrap_or_default();
    let payload = payload_from_js(&data);

    future_to_promise(async move {
        let request = AjaxRequest::new(url, method).with_data(payload);

        let on_success = on_success.map(|f| {
            move |value: &Value| {
                let called = to_js(value).and_then(|js| {
                    f.call1(&JsValue::NULL, &js).map_err(UiError::js)
                });
                if let Err(e) = called {
                    log::error!("ajaxRequest success callback failed: {}", e);
                }
            }
        });
        let on_error = on_error.map(|f| {
            move |error: UiError| {
                if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from(error)) {
                    log::error!("ajaxRequest error callback failed: {}", UiError::js(e));
                }
            }
        });

        let response = ajax_request_with(&request, on_success, on_error, &PageNotifier).await;
        match response {
            Some(value) => to_js(&value).map_err(JsValue::from),
            None => Ok(JsValue::UNDEFINED),
        }
    })
}

fn payload_from_js(data: &JsValue) -> Payload {
    if data.is_undefined() || data.is_null() {
        return Payload::Empty;
    }
    if let Some(encoded) = data.as_string() {
        return Payload::Encoded(encoded);
    }
    match serde_wasm_bindgen::from_value::<Value>(data.clone()) {
        Ok(value) => Payload::from_json(&value),
        Err(e) => {
            log::warn!("Unsupported ajaxRequest data, sending none: {}", e);
            Payload::Empty
        }
    }
}

fn to_js(value: &Value) -> Result<JsValue, UiError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| UiError::Decode(e.to_string()))
}
