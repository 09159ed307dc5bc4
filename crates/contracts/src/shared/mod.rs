pub mod config;
pub mod cookie;
pub mod csv_export;
pub mod datatable_options;
pub mod format;
pub mod table_shape;
pub mod ui_state;
