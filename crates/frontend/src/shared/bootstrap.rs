//! Bindings to the Bootstrap 5 bundle loaded by the page (`window.bootstrap`).

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::shared::dom::query_all;

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    pub type Tooltip;

    #[wasm_bindgen(constructor, catch, js_class = "Tooltip")]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;

    pub type Popover;

    #[wasm_bindgen(constructor, catch, js_class = "Popover")]
    fn new(element: &Element) -> Result<Popover, JsValue>;

    pub type Alert;

    #[wasm_bindgen(constructor, catch, js_class = "Alert")]
    fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, js_class = "Alert")]
    fn close(this: &Alert);
}

/// Tooltips and popovers declared via `data-bs-toggle`.
pub fn init_components(document: &Document) {
    let mut failures = 0;
    for element in query_all(document, r#"[data-bs-toggle="tooltip"]"#) {
        failures += Tooltip::new(&element).is_err() as usize;
    }
    for element in query_all(document, r#"[data-bs-toggle="popover"]"#) {
        failures += Popover::new(&element).is_err() as usize;
    }
    if failures > 0 {
        log::warn!("bootstrap unavailable: {} tooltip/popover(s) not initialised", failures);
    }
}

/// Close an alert with Bootstrap's fade-out, or just remove it without Bootstrap.
pub fn close_alert(element: &Element) {
    match Alert::new(element) {
        Ok(alert) => alert.close(),
        Err(_) => element.remove(),
    }
}

/// Close the server-rendered flash messages after `delay_ms`.
pub fn auto_hide_alerts(document: &Document, delay_ms: u32) {
    let document = document.clone();
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        for alert in query_all(&document, ".alert-dismissible") {
            close_alert(&alert);
        }
    })
    .forget();
}
