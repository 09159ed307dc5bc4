//! AJAX helper for the page's JSON endpoints.
//!
//! Every request carries the CSRF token from the `csrftoken` cookie. Payloads
//! are encoded the way jQuery encodes them: into the query string for GET,
//! as a form body otherwise.

use contracts::shared::ui_state::ToastKind;
use gloo_net::http::{Method as HttpMethod, RequestBuilder};
use serde_json::Value;

use super::cookies::document_cookie;
use super::ui_service::{Notifier, PageNotifier};
use crate::config::ui_config;
use crate::error::UiError;

const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// Case-insensitive; unknown methods fall back to GET.
    pub fn parse(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            "HEAD" => Self::Head,
            "OPTIONS" => Self::Options,
            _ => Self::Get,
        }
    }

    /// GET and HEAD carry their payload in the query string.
    fn carries_query(self) -> bool {
        matches!(self, Self::Get | Self::Head)
    }

    fn to_http(self) -> HttpMethod {
        match self {
            Self::Get => HttpMethod::GET,
            Self::Post => HttpMethod::POST,
            Self::Put => HttpMethod::PUT,
            Self::Patch => HttpMethod::PATCH,
            Self::Delete => HttpMethod::DELETE,
            Self::Head => HttpMethod::HEAD,
            Self::Options => HttpMethod::OPTIONS,
        }
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Payload {
    #[default]
    Empty,
    /// Already url-encoded, sent as given.
    Encoded(String),
    Form(Vec<(String, String)>),
}

impl Payload {
    /// Flattens a JSON object into form pairs with jQuery's bracket naming:
    /// `{"items": [1, 2]}` becomes `items[]=1&items[]=2`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(s) => Self::Encoded(s.clone()),
            Value::Object(map) => {
                let mut pairs = Vec::new();
                for (key, value) in map {
                    push_pairs(&mut pairs, key, value);
                }
                Self::Form(pairs)
            }
            other => Self::Encoded(scalar_text(other)),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Encoded(s) => s.is_empty(),
            Self::Form(pairs) => pairs.is_empty(),
        }
    }

    /// Url-encoded form of the payload, `+` for spaces.
    pub fn encode(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Encoded(s) => s.clone(),
            Self::Form(pairs) => pairs
                .iter()
                .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
                .collect::<Vec<_>>()
                .join("&"),
        }
    }
}

fn encode_component(text: &str) -> String {
    urlencoding::encode(text).replace("%20", "+")
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn push_pairs(pairs: &mut Vec<(String, String)>, prefix: &str, value: &Value) {
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if item.is_array() || item.is_object() {
                    push_pairs(pairs, &format!("{}[{}]", prefix, i), item);
                } else {
                    push_pairs(pairs, &format!("{}[]", prefix), item);
                }
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                push_pairs(pairs, &format!("{}[{}]", prefix, key), item);
            }
        }
        scalar => pairs.push((prefix.to_string(), scalar_text(scalar))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AjaxRequest {
    pub url: String,
    pub method: Method,
    pub data: Payload,
}

impl AjaxRequest {
    pub fn new(url: impl Into<String>, method: Method) -> Self {
        Self {
            url: url.into(),
            method,
            data: Payload::Empty,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(url, Method::Get)
    }

    pub fn with_data(mut self, data: Payload) -> Self {
        self.data = data;
        self
    }

    fn sends_body(&self) -> bool {
        !self.method.carries_query() && !self.data.is_empty()
    }

    /// Target URL, with the payload appended for GET requests.
    pub fn target_url(&self) -> String {
        if !self.method.carries_query() || self.data.is_empty() {
            return self.url.clone();
        }
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, self.data.encode())
    }
}

/// Sends the request and parses the JSON response.
pub async fn ajax_request(request: &AjaxRequest) -> Result<Value, UiError> {
    let config = ui_config();
    let mut builder = RequestBuilder::new(&request.target_url())
        .method(request.method.to_http())
        .header("Accept", ACCEPT_JSON);

    match document_cookie(&config.csrf_cookie) {
        Some(token) => builder = builder.header(&config.csrf_header, &token),
        None => log::debug!("No {} cookie, sending without CSRF header", config.csrf_cookie),
    }

    let response = if request.sends_body() {
        builder
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(request.data.encode())
            .map_err(|e| UiError::Network(e.to_string()))?
            .send()
            .await
    } else {
        builder.send().await
    }
    .map_err(|e| UiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(UiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| UiError::Network(e.to_string()))?;
    parse_json_body(&text)
}

pub fn parse_json_body(text: &str) -> Result<Value, UiError> {
    serde_json::from_str(text).map_err(|e| UiError::Decode(e.to_string()))
}

/// Hands the outcome to the caller's handlers and returns the value on
/// success.
///
/// A failure with no error handler shows exactly one error toast.
pub fn route_result<T, S, E, N>(
    result: Result<T, UiError>,
    on_success: Option<S>,
    on_error: Option<E>,
    notifier: &N,
) -> Option<T>
where
    S: FnOnce(&T),
    E: FnOnce(UiError),
    N: Notifier + ?Sized,
{
    match result {
        Ok(value) => {
            if let Some(on_success) = on_success {
                on_success(&value);
            }
            Some(value)
        }
        Err(error) => {
            match on_error {
                Some(on_error) => on_error(error),
                None => notifier.notify(&format!("An error occurred: {}", error), ToastKind::Error),
            }
            None
        }
    }
}

/// Callback flavour of [`ajax_request`].
///
/// Failures are always handled here, by `on_error` or a toast, so the caller
/// only sees the response of a successful request.
pub async fn ajax_request_with<S, E, N>(
    request: &AjaxRequest,
    on_success: Option<S>,
    on_error: Option<E>,
    notifier: &N,
) -> Option<Value>
where
    S: FnOnce(&Value),
    E: FnOnce(UiError),
    N: Notifier + ?Sized,
{
    route_result(ajax_request(request).await, on_success, on_error, notifier)
}
