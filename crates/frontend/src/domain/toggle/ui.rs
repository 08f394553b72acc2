use contracts::domain::resource_kind::ResourceKind;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use super::{toggle_resource, ResourceView};
use crate::shared::context::PageContext;
use crate::shared::control::{DomButton, DomStyled, Styled};
use crate::shared::dom::{closest, listen, query_all};

/// Wire every `.toggle-investment` / `.toggle-organism` button on the page.
pub fn init_toggle_actions(document: &Document, ctx: &PageContext) {
    for kind in ResourceKind::all() {
        let view = ResourceView::of(kind);
        for element in query_all(document, view.toggle_selector) {
            let Some(button) = DomButton::from_element(element.clone()) else {
                log::warn!("{} is not a <button>", view.toggle_selector);
                continue;
            };
            let ctx = ctx.clone();
            let button = Rc::new(button);
            let target = element.clone();
            listen(&element, "click", move |_| {
                let Some(id) = target.get_attribute(view.id_attribute) else {
                    log::warn!("toggle button without {}", view.id_attribute);
                    return;
                };
                let ctx = ctx.clone();
                let button = button.clone();
                let card = closest(&target, ".card").map(DomStyled);
                spawn_local(async move {
                    let outcome = toggle_resource(
                        &ctx,
                        view,
                        &id,
                        button.as_ref(),
                        card.as_ref().map(|c| c as &dyn Styled),
                    )
                    .await;
                    log::debug!("toggle {} {}: {:?}", view.kind.as_str(), id, outcome);
                });
            });
        }
    }
}
