//! Printing a single element without touching the live page.
//!
//! The element's markup and the page's stylesheets are copied into a hidden
//! iframe, which is printed and then removed. Nothing in the page's DOM or
//! in-memory state changes.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::HtmlIFrameElement;

use crate::error::UiError;
use crate::shared::dom;

/// Time given to copied `<link>` stylesheets to load in the print frame.
const STYLESHEET_SETTLE_MS: u32 = 250;

const PRINT_FRAME_STYLE: &str =
    "position: fixed; right: 0; bottom: 0; width: 0; height: 0; border: 0;";

/// Opens the print dialog for the contents of `element_id`.
pub async fn print_element(element_id: &str) -> Result<(), UiError> {
    let document = dom::document()?;
    let target = dom::element_by_id(element_id)?;

    let styles: String = dom::select_all(r#"link[rel="stylesheet"], style"#)
        .iter()
        .map(|el| el.outer_html())
        .collect();

    let frame = document
        .create_element("iframe")
        .map_err(UiError::js)?
        .dyn_into::<HtmlIFrameElement>()
        .map_err(|_| UiError::Js("Failed to cast to iframe".into()))?;
    frame
        .set_attribute("style", PRINT_FRAME_STYLE)
        .map_err(UiError::js)?;
    frame
        .set_attribute("aria-hidden", "true")
        .map_err(UiError::js)?;

    let body = dom::body()?;
    body.append_child(&frame).map_err(UiError::js)?;

    let result = print_in_frame(&frame, &styles, &target.inner_html()).await;

    body.remove_child(&frame).map_err(UiError::js)?;
    result
}

async fn print_in_frame(
    frame: &HtmlIFrameElement,
    styles: &str,
    contents: &str,
) -> Result<(), UiError> {
    let frame_document = frame
        .content_document()
        .ok_or_else(|| UiError::Js("Print frame has no document".into()))?;
    let frame_window = frame
        .content_window()
        .ok_or_else(|| UiError::Js("Print frame has no window".into()))?;

    if let Some(head) = frame_document.head() {
        head.set_inner_html(styles);
    }
    frame_document
        .body()
        .ok_or(UiError::NoBody)?
        .set_inner_html(contents);

    TimeoutFuture::new(STYLESHEET_SETTLE_MS).await;

    frame_window.focus().map_err(UiError::js)?;
    frame_window.print().map_err(UiError::js)?;
    Ok(())
}
