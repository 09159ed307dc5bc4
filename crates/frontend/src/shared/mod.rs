pub mod api_utils;
pub mod clipboard;
pub mod confirm;
pub mod cookies;
pub mod datatable;
pub mod dom;
pub mod export;
pub mod forms;
pub mod print;
pub mod ui_service;
