//! Export of on-page tables to CSV files

use contracts::shared::csv_export::build_csv;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Element, HtmlAnchorElement, Url};

use crate::error::UiError;
use crate::shared::dom;

/// Reads the table's header and body texts.
///
/// Headers come from every `thead th`, rows from every `tbody tr`.
pub fn read_table(table: &Element) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = dom::select_all_in(table, "thead th")
        .iter()
        .map(dom::trimmed_text)
        .collect();
    let rows = dom::select_all_in(table, "tbody tr")
        .iter()
        .map(|tr| {
            dom::select_all_in(tr, "td")
                .iter()
                .map(dom::trimmed_text)
                .collect()
        })
        .collect();
    (headers, rows)
}

/// Exports the table with id `table_id` and starts the download
pub fn export_table_to_csv(table_id: &str, filename: &str) -> Result<(), UiError> {
    let table = dom::element_by_id(table_id)?;
    let (headers, rows) = read_table(&table);

    download_text(&build_csv(&headers, &rows), CSV_MIME, filename)?;

    log::debug!("Exported {} rows from #{} to {}", rows.len(), table_id, filename);
    Ok(())
}

const CSV_MIME: &str = "text/csv";

/// Saves `content` as a file through an object URL and a hidden link.
///
/// The object URL is revoked even when clicking the link fails.
fn download_text(content: &str, mime: &str, filename: &str) -> Result<(), UiError> {
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    let parts = js_sys::Array::of1(&content.into());
    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties).map_err(UiError::js)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(UiError::js)?;
    let clicked = click_download_link(&url, filename);
    Url::revoke_object_url(&url).map_err(UiError::js)?;
    clicked
}

fn click_download_link(url: &str, filename: &str) -> Result<(), UiError> {
    let link: HtmlAnchorElement = dom::document()?
        .create_element("a")
        .map_err(UiError::js)?
        .unchecked_into();
    link.set_href(url);
    link.set_download(filename);
    link.style()
        .set_property("display", "none")
        .map_err(UiError::js)?;

    let body = dom::body()?;
    body.append_child(&link).map_err(UiError::js)?;
    link.click();
    body.remove_child(&link).map_err(UiError::js)?;
    Ok(())
}
