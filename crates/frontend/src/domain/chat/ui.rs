use contracts::domain::resource_kind::ResourceKind;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use super::{send_message, ChatView};
use crate::domain::toggle::ResourceView;
use crate::shared::context::PageContext;
use crate::shared::control::DomButton;
use crate::shared::dom::{closest, listen, query_all, query_in, scroll_to_bottom};
use crate::shared::forms::{submit_button, FormSubmission};

/// Chat widget around one chat form.
struct DomChatView {
    input: Option<HtmlInputElement>,
    /// List entries are appended to (`.{kind}-chat-messages`).
    list: Option<Element>,
    /// Scrollable `.chat-messages` inside the form's `.chat-container`.
    scroller: Option<Element>,
}

impl DomChatView {
    fn for_form(document: &Document, form: &HtmlFormElement, view: &ResourceView) -> Self {
        Self {
            input: query_in(form, r#"input[name="message"]"#)
                .and_then(|e| e.dyn_into::<HtmlInputElement>().ok()),
            list: document.query_selector(view.chat_list_selector).ok().flatten(),
            scroller: closest(form, ".chat-container")
                .and_then(|container| query_in(&container, ".chat-messages")),
        }
    }
}

impl ChatView for DomChatView {
    fn clear_input(&self) {
        if let Some(input) = &self.input {
            input.set_value("");
        }
    }

    fn append_entry(&self, html: &str) {
        let Some(list) = &self.list else {
            log::warn!("chat list not found; message saved but not shown");
            return;
        };
        if let Err(e) = list.insert_adjacent_html("beforeend", html) {
            log::error!("failed to append chat entry: {:?}", e);
        }
        if let Some(placeholder) = query_in(list, ".no-messages") {
            placeholder.remove();
        }
    }

    fn scroll_to_bottom(&self) {
        if let Some(scroller) = &self.scroller {
            scroll_to_bottom(scroller);
        }
    }
}

/// Intercept chat form submissions and scroll existing chats to the bottom.
pub fn init_chat(document: &Document, ctx: &PageContext) {
    for kind in ResourceKind::all() {
        let view = ResourceView::of(kind);
        for element in query_all(document, view.chat_form_selector) {
            let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
                continue;
            };
            let Some(submit) = submit_button(&form).and_then(DomButton::from_element) else {
                log::warn!("{} without a submit button", view.chat_form_selector);
                continue;
            };
            let submit = Rc::new(submit);
            let chat = Rc::new(DomChatView::for_form(document, &form, view));
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
                        log::error!("failed to read chat form: {:?}", e);
                        return;
                    }
                };
                let ctx = ctx.clone();
                let submit = submit.clone();
                let chat = chat.clone();
                spawn_local(async move {
                    let outcome =
                        send_message(&ctx, submission, submit.as_ref(), chat.as_ref()).await;
                    log::debug!("chat message ({}): {:?}", view.kind.as_str(), outcome);
                });
            });
        }
    }

    for container in query_all(document, ".chat-messages") {
        scroll_to_bottom(&container);
    }
}
