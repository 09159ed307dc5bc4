//! DataTables activation for `.datatable` tables.
//!
//! [`init`] holds the browser-independent part (checks, idempotence,
//! reporting); [`binding`] talks to the jQuery plugin.

pub mod binding;
pub mod init;

pub use binding::{DataTablesWidget, DomTable};
pub use init::{InitReport, TableInitializer, TableWidget, WidgetTable};

use contracts::shared::datatable_options::DataTableOptions;

use crate::config::ui_config;
use crate::error::UiError;
use crate::shared::dom;

fn initializer() -> TableInitializer<DataTablesWidget> {
    TableInitializer::new(
        DataTablesWidget::detect(),
        DataTableOptions::with_page_length(ui_config().page_length),
    )
}

/// Activates the widget on every candidate table of the page.
///
/// Safe to call again after content is swapped in; active tables are skipped.
pub fn initialize_data_tables() -> InitReport {
    let tables: Vec<DomTable> = dom::select_all(&ui_config().selectors.datatable)
        .into_iter()
        .map(DomTable)
        .collect();
    initializer().initialize(&tables)
}

/// Reloads the AJAX source of the table matching `selector`.
pub fn reload_data_table(selector: &str) -> Result<(), UiError> {
    initializer().reload(selector)
}
