use contracts::shared::cookie::get_cookie;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Reads `name` from `document.cookie`; `None` when absent.
pub fn document_cookie(name: &str) -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    get_cookie(&cookies, name)
}
