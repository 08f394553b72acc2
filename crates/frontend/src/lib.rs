pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

use shared::config::ClientConfig;

#[wasm_bindgen]
pub fn boot() {
    let (config, rejected) = ClientConfig::from_document();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();

    for attribute in rejected {
        log::warn!("ignoring invalid config attribute {}", attribute);
    }

    app::install_global_error_logging();
    app::run_when_ready(config);
}

#[wasm_bindgen(start)]
pub fn start() {
    boot();
}
