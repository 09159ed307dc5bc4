pub mod app;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod exports;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    bootstrap::on_dom_ready(bootstrap::run);
}
