use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::{label_value, star_colors, submit_rating};
use crate::shared::context::PageContext;
use crate::shared::control::DomButton;
use crate::shared::dom::{closest, listen, query_all, query_all_in};
use crate::shared::forms::{submit_button, FormSubmission};

/// Recolour the labels of the `.star-rating` group around `input`.
fn update_star_display(input: &HtmlInputElement) {
    let Some(container) = closest(input, ".star-rating") else {
        return;
    };
    let Ok(selected) = input.value().trim().parse::<f64>() else {
        return;
    };
    let labels: Vec<HtmlElement> = query_all_in(&container, "label")
        .into_iter()
        .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
        .collect();
    let values: Vec<f64> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| label_value(label.get_attribute("data-value").as_deref(), i))
        .collect();
    for (label, color) in labels.iter().zip(star_colors(selected, &values)) {
        let _ = label.style().set_property("color", color);
    }
}

pub fn init_star_rating(document: &Document, ctx: &PageContext) {
    for element in query_all(document, ".rating-form") {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };

        for star in query_all_in(&form, ".star-rating input") {
            let Ok(input) = star.dyn_into::<HtmlInputElement>() else {
                continue;
            };
            let target = input.clone();
            listen(&input, "change", move |_| update_star_display(&target));
        }

        let Some(submit) = submit_button(&form).and_then(DomButton::from_element) else {
            log::warn!(".rating-form without a submit button");
            continue;
        };
        let submit = Rc::new(submit);
        let ctx = ctx.clone();
        let target = form.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            if !target.check_validity() {
                return;
            }
            let submission = match FormSubmission::from_form(&target) {
                Ok(submission) => submission,
                Err(e) => {
                    log::error!("failed to read rating form: {:?}", e);
                    return;
                }
            };
            let ctx = ctx.clone();
            let submit = submit.clone();
            spawn_local(async move {
                let outcome = submit_rating(&ctx, submission, submit.as_ref()).await;
                log::debug!("rating: {:?}", outcome);
            });
        });
    }
}
