use wasm_bindgen::JsCast;
use web_sys::{Document, Node};

use crate::shared::dom::listen;

/// Viewport width up to which the sidebar is an overlay.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Whether a document click should close the sidebar.
pub fn should_close(viewport_width: f64, inside_sidebar: bool, inside_toggle: bool) -> bool {
    viewport_width <= MOBILE_BREAKPOINT_PX && !inside_sidebar && !inside_toggle
}

/// `#sidebarToggle` shows/hides `.sidebar`; on small screens a click
/// anywhere else hides it.
pub fn init_sidebar(document: &Document) {
    let toggle = document.query_selector("#sidebarToggle").ok().flatten();
    let sidebar = document.query_selector(".sidebar").ok().flatten();
    let (Some(toggle), Some(sidebar)) = (toggle, sidebar) else {
        return;
    };

    let target = sidebar.clone();
    listen(&toggle, "click", move |_| {
        let _ = target.class_list().toggle("show");
    });

    listen(document, "click", move |event| {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .unwrap_or(f64::MAX);
        let clicked = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let clicked = clicked.as_ref();
        if should_close(width, sidebar.contains(clicked), toggle.contains(clicked)) {
            let _ = sidebar.class_list().remove_1("show");
        }
    });
}
