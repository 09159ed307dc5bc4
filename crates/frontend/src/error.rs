use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure of a single page helper. None of these are fatal to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("No window object")]
    NoWindow,
    #[error("No document object")]
    NoDocument,
    #[error("No body element")]
    NoBody,
    #[error("Element not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Js(String),
    #[error("{0}")]
    Network(String),
    /// Reads as the status text, or the code when the server sent none.
    #[error("{}", status_message(.status, .status_text))]
    Status { status: u16, status_text: String },
    #[error("Invalid JSON response: {0}")]
    Decode(String),
}

fn status_message(status: &u16, status_text: &str) -> String {
    if status_text.is_empty() {
        status.to_string()
    } else {
        status_text.to_string()
    }
}

impl UiError {
    /// Wraps a thrown JS value, preferring `Error.message` when there is one.
    pub fn js(value: JsValue) -> Self {
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return Self::Js(String::from(error.message()));
        }
        match value.as_string() {
            Some(message) => Self::Js(message),
            None => Self::Js(format!("{:?}", value)),
        }
    }
}

impl From<UiError> for JsValue {
    fn from(error: UiError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            UiError::Status {
                status: 404,
                status_text: "Not Found".into()
            }
            .to_string(),
            "Not Found"
        );
        assert_eq!(
            UiError::Status {
                status: 502,
                status_text: String::new()
            }
            .to_string(),
            "502"
        );
        assert_eq!(
            UiError::NotFound("salesTable".into()).to_string(),
            "Element not found: salesTable"
        );
        assert_eq!(UiError::Network("timeout".into()).to_string(), "timeout");
    }
}
