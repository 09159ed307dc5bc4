//! Small lookups shared by the DOM helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body() -> Result<HtmlElement, UiError> {
    document()?.body().ok_or(UiError::NoBody)
}

pub fn element_by_id(id: &str) -> Result<Element, UiError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| UiError::NotFound(id.to_string()))
}

/// All elements matching `selector` in the document. Empty on any failure.
pub fn select_all(selector: &str) -> Vec<Element> {
    document()
        .ok()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

/// All elements matching `selector` below `root`.
pub fn select_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

/// Trimmed text content of an element.
pub fn trimmed_text(el: &Element) -> String {
    el.text_content().unwrap_or_default().trim().to_string()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
