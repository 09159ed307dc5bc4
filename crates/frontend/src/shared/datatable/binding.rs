//! jQuery DataTables plugin, reached through the page's globals.
//!
//! The plugin is looked up by reflection so a page without it yields
//! `None` from [`DataTablesWidget::detect`] instead of a thrown
//! `ReferenceError`.

use contracts::shared::datatable_options::DataTableOptions;
use contracts::shared::table_shape::TableShape;
use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use super::init::{TableWidget, WidgetTable};
use crate::error::UiError;
use crate::shared::dom;

/// A `<table>` element on the page.
pub struct DomTable(pub Element);

impl WidgetTable for DomTable {
    fn shape(&self) -> TableShape {
        let table = &self.0;
        let first_header_row_cells = table
            .query_selector("thead tr")
            .ok()
            .flatten()
            .map(|tr| dom::select_all_in(&tr, "th").len())
            .unwrap_or(0);
        let first_body_row_cells = table
            .query_selector("tbody tr")
            .ok()
            .flatten()
            .map(|tr| dom::select_all_in(&tr, "td").len())
            .unwrap_or(0);

        TableShape {
            header_cells: dom::select_all_in(table, "thead tr th").len(),
            first_header_row_cells,
            has_body: table.query_selector("tbody").ok().flatten().is_some(),
            first_body_row_cells,
        }
    }
}

pub struct DataTablesWidget {
    jquery: Function,
    data_table: Function,
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, UiError> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(UiError::js)
}

fn get_fn(target: &JsValue, key: &str) -> Result<Function, UiError> {
    get(target, key)?
        .dyn_into::<Function>()
        .map_err(|_| UiError::Js(format!("{} is not a function", key)))
}

impl DataTablesWidget {
    /// Finds `jQuery.fn.DataTable`; `None` when either is missing.
    pub fn detect() -> Option<Self> {
        let global: JsValue = js_sys::global().into();
        let jquery = get_fn(&global, "jQuery").ok()?;
        let plugins = get(&jquery, "fn").ok()?;
        let data_table = get_fn(&plugins, "DataTable").ok()?;
        Some(Self { jquery, data_table })
    }

    /// `$(target).DataTable` bound to its jQuery collection.
    fn api_for(&self, target: &JsValue) -> Result<(JsValue, Function), UiError> {
        let wrapped = self
            .jquery
            .call1(&JsValue::NULL, target)
            .map_err(UiError::js)?;
        let method = get_fn(&wrapped, "DataTable")?;
        Ok((wrapped, method))
    }
}

impl TableWidget for DataTablesWidget {
    type Table = DomTable;

    fn is_active(&self, table: &DomTable) -> bool {
        get_fn(self.data_table.as_ref(), "isDataTable")
            .and_then(|is_data_table| {
                is_data_table
                    .call1(self.data_table.as_ref(), table.0.as_ref())
                    .map_err(UiError::js)
            })
            .map(|value| value.is_truthy())
            .unwrap_or(false)
    }

    fn activate(&self, table: &DomTable, options: &DataTableOptions) -> Result<(), UiError> {
        let options = options
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| UiError::Js(e.to_string()))?;
        let (wrapped, method) = self.api_for(table.0.as_ref())?;
        method.call1(&wrapped, &options).map_err(UiError::js)?;
        Ok(())
    }

    fn reload(&self, selector: &str) -> Result<(), UiError> {
        let (wrapped, method) = self.api_for(&JsValue::from_str(selector))?;
        let api = method.call0(&wrapped).map_err(UiError::js)?;
        let ajax = get(&api, "ajax")?;
        get_fn(&ajax, "reload")?.call0(&ajax).map_err(UiError::js)?;
        Ok(())
    }
}
