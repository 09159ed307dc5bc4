use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::shared::dom;

/// Runs the browser's constraint validation on a form.
///
/// Invalid forms get the native messages shown and return `false`. A
/// missing form is treated as invalid.
pub fn validate_form(form_id: &str) -> bool {
    let form = match dom::element_by_id(form_id).map(|el| el.dyn_into::<HtmlFormElement>()) {
        Ok(Ok(form)) => form,
        Ok(Err(_)) => {
            log::warn!("#{} is not a form", form_id);
            return false;
        }
        Err(e) => {
            log::warn!("{}", e);
            return false;
        }
    };

    if form.check_validity() {
        return true;
    }
    form.report_validity();
    false
}
