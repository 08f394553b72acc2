//! Page start-up: build the shared services once and wire every widget.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, ErrorEvent, PromiseRejectionEvent};

use crate::domain::charts::ui::init_charts;
use crate::domain::chat::ui::init_chat;
use crate::domain::rating::ui::init_star_rating;
use crate::domain::toggle::ui::init_toggle_actions;
use crate::layout::sidebar::init_sidebar;
use crate::shared::bootstrap;
use crate::shared::config::ClientConfig;
use crate::shared::context::{BrowserConfirm, PageContext};
use crate::shared::date_utils::BrowserZone;
use crate::shared::dom::listen;
use crate::shared::forms;
use crate::shared::http::GlooTransport;
use crate::shared::notify::DomAlertSink;

/// Run `init_page` now if the document is parsed, else on `DOMContentLoaded`.
pub fn run_when_ready(config: ClientConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; nothing to initialise");
        return;
    };
    if document.ready_state() != "loading" {
        init_page(&document, &config);
        return;
    }

    let ready = document.clone();
    let mut config = Some(config);
    listen(&document, "DOMContentLoaded", move |_| {
        if let Some(config) = config.take() {
            init_page(&ready, &config);
        }
    });
}

pub fn init_page(document: &Document, config: &ClientConfig) {
    let ctx = PageContext {
        transport: Rc::new(GlooTransport::new(config.request_timeout_ms)),
        notifier: Rc::new(DomAlertSink::attach(document, config.alert_dismiss_ms)),
        confirm: Rc::new(BrowserConfirm),
        local_zone: Rc::new(BrowserZone),
    };

    bootstrap::init_components(document);
    forms::init_validation(document);
    forms::init_number_formatting(document);
    init_toggle_actions(document, &ctx);
    init_charts(document);
    init_star_rating(document, &ctx);
    init_chat(document, &ctx);
    init_sidebar(document);
    bootstrap::auto_hide_alerts(document, config.alert_dismiss_ms);

    log::debug!("page initialised");
}

/// Log script errors and unhandled promise rejections.
pub fn install_global_error_logging() {
    let Some(window) = web_sys::window() else {
        return;
    };
    listen(&window, "error", |event| {
        match event.dyn_ref::<ErrorEvent>() {
            Some(e) => log::error!("JavaScript error: {} ({}:{})", e.message(), e.filename(), e.lineno()),
            None => log::error!("JavaScript error: {:?}", event),
        }
    });
    listen(&window, "unhandledrejection", |event| {
        match event.dyn_ref::<PromiseRejectionEvent>() {
            Some(e) => log::error!("unhandled promise rejection: {:?}", e.reason()),
            None => log::error!("unhandled promise rejection: {:?}", event),
        }
    });
}
