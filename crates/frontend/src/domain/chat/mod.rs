//! Append-only chat attached to investments and organisms.
//!
//! Messages are only ever appended after a local submission; there is no
//! history sync and nothing is removed.

pub mod ui;

use contracts::domain::chat::{ChatMessage, ChatResponse, MESSAGE_FIELD};

use crate::shared::context::PageContext;
use crate::shared::control::{BusyGuard, Control};
use crate::shared::date_utils::{format_chat_timestamp, LocalZone};
use crate::shared::dispatch::{dispatch, fail, refuse, Outcome};
use crate::shared::error::RequestError;
use crate::shared::forms::FormSubmission;
use crate::shared::html::escape_html;
use crate::shared::http::ApiRequest;
use crate::shared::notify::AlertLevel;

pub const EMPTY_MESSAGE: &str = "El mensaje no puede estar vacío";
pub const GENERIC_ERROR: &str = "Error al enviar el mensaje";
pub const AUTHOR_LABEL: &str = "Tú";

/// The chat widget the message goes into.
pub trait ChatView {
    fn clear_input(&self);
    /// Append rendered entry markup to the list, dropping any placeholder.
    fn append_entry(&self, html: &str);
    fn scroll_to_bottom(&self);
}

/// Markup of one chat entry. All server-provided text is escaped.
pub fn render_chat_entry(message: &ChatMessage, zone: &dyn LocalZone) -> String {
    let timestamp = format_chat_timestamp(&message.created_at, zone);
    format!(
        concat!(
            r#"<div class="chat-message fade-in">"#,
            r#"<div class="chat-message-author">{}</div>"#,
            r#"<div class="chat-message-time">{}</div>"#,
            r#"<div class="chat-message-content">{}</div>"#,
            "</div>"
        ),
        AUTHOR_LABEL,
        escape_html(&timestamp),
        escape_html(&message.message)
    )
}

/// Post a chat form and append the persisted message.
pub async fn send_message<C, V>(
    ctx: &PageContext,
    submission: FormSubmission,
    submit: &C,
    chat: &V,
) -> Outcome
where
    C: Control + ?Sized,
    V: ChatView + ?Sized,
{
    let text = submission.field(MESSAGE_FIELD).unwrap_or_default();
    if text.trim().is_empty() {
        ctx.notifier.notify(AlertLevel::Warning, EMPTY_MESSAGE);
        return Outcome::Invalid;
    }
    if submit.is_disabled() {
        return Outcome::Busy;
    }

    let _guard = BusyGuard::engage(submit, None);
    let request = ApiRequest::form(submission.action, submission.fields);

    let response: ChatResponse = match dispatch(ctx, &request).await {
        Ok(response) => response,
        Err(e) => return fail(ctx, &request.url, e, GENERIC_ERROR),
    };
    if !response.success {
        return refuse(ctx, &request.url, response.message);
    }
    let Some(message) = response.data else {
        return fail(
            ctx,
            &request.url,
            RequestError::Malformed("chat response without 'data'"),
            GENERIC_ERROR,
        );
    };

    chat.clear_input();
    chat.append_entry(&render_chat_entry(&message, ctx.local_zone.as_ref()));
    chat.scroll_to_bottom();
    Outcome::Completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::context::testing::TestPage;
    use crate::shared::control::testing::FakeButton;
    use crate::shared::http::testing::FakeTransport;
    use crate::shared::http::RequestBody;
    use chrono::FixedOffset;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeChat {
        input_cleared: Cell<bool>,
        entries: RefCell<Vec<String>>,
        scrolled: Cell<usize>,
    }

    impl ChatView for FakeChat {
        fn clear_input(&self) {
            self.input_cleared.set(true);
        }

        fn append_entry(&self, html: &str) {
            self.entries.borrow_mut().push(html.to_string());
        }

        fn scroll_to_bottom(&self) {
            self.scrolled.set(self.scrolled.get() + 1);
        }
    }

    fn submission(message: &str) -> FormSubmission {
        FormSubmission {
            action: "/investment/4/add_message".into(),
            fields: vec![("message".into(), message.into())],
        }
    }

    const PERSISTED_HI: &str = r#"{"success": true, "message": "Mensaje enviado", "data": {"message": "hi", "created_at": "2026-10-16T14:05:00"}}"#;

    #[test]
    fn test_whitespace_message_sends_nothing() {
        let page = TestPage::new(FakeTransport::replying(PERSISTED_HI), true);
        let submit = FakeButton::new("Enviar", &[]);
        let chat = FakeChat::default();

        for blank in ["", "   ", "\t\n "] {
            let outcome = block_on(send_message(&page.ctx, submission(blank), &submit, &chat));
            assert_eq!(outcome, Outcome::Invalid);
        }

        assert_eq!(page.transport.request_count(), 0);
        assert!(chat.entries.borrow().is_empty());
        assert!(!chat.input_cleared.get());
        assert_eq!(submit.disable_count.get(), 0);
        assert_eq!(
            page.sink.last(),
            Some((AlertLevel::Warning, EMPTY_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_successful_message_is_appended_once() {
        let page = TestPage::new(FakeTransport::replying(PERSISTED_HI), true);
        let submit = FakeButton::new("Enviar", &[]);
        let chat = FakeChat::default();

        let outcome = block_on(send_message(&page.ctx, submission("hi"), &submit, &chat));

        assert_eq!(outcome, Outcome::Completed);
        let entries = chat.entries.borrow();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains(r#"<div class="chat-message-content">hi</div>"#));
        assert!(entries[0].contains(r#"<div class="chat-message-time">16 oct 2026, 14:05</div>"#));
        assert!(chat.input_cleared.get());
        assert_eq!(chat.scrolled.get(), 1);
        assert!(!submit.is_disabled());
        assert_eq!(submit.disable_count.get(), 1);
        assert_eq!(page.sink.count(), 0);

        let sent = page.transport.sent.borrow();
        assert_eq!(sent[0].url, "/investment/4/add_message");
        assert_eq!(
            sent[0].body,
            RequestBody::Form(vec![("message".into(), "hi".into())])
        );
    }

    #[test]
    fn test_second_submit_while_in_flight_is_busy() {
        let page = TestPage::new(FakeTransport::hanging(), true);
        let submit = FakeButton::new("Enviar", &[]);
        let chat = FakeChat::default();

        let mut first = Box::pin(send_message(&page.ctx, submission("hola"), &submit, &chat));
        assert!(first.as_mut().now_or_never().is_none());

        let second = block_on(send_message(&page.ctx, submission("hola"), &submit, &chat));

        assert_eq!(second, Outcome::Busy);
        assert_eq!(page.transport.request_count(), 1);
        assert!(chat.entries.borrow().is_empty());
        assert_eq!(page.sink.count(), 0);
        drop(first);
        assert!(!submit.is_disabled());
    }

    #[test]
    fn test_refusal_keeps_input() {
        let page = TestPage::new(
            FakeTransport::replying(r#"{"success": false, "message": "Error al enviar el mensaje"}"#),
            true,
        );
        let submit = FakeButton::new("Enviar", &[]);
        let chat = FakeChat::default();

        let outcome = block_on(send_message(&page.ctx, submission("hola"), &submit, &chat));

        assert_eq!(outcome, Outcome::Refused("Error al enviar el mensaje".into()));
        assert!(!chat.input_cleared.get());
        assert!(chat.entries.borrow().is_empty());
        assert!(!submit.is_disabled());
    }

    #[test]
    fn test_transport_failure_reenables_submit() {
        let page = TestPage::new(FakeTransport::failing(RequestError::Timeout(30_000)), true);
        let submit = FakeButton::new("Enviar", &[]);
        let chat = FakeChat::default();

        let outcome = block_on(send_message(&page.ctx, submission("hola"), &submit, &chat));

        assert_eq!(outcome, Outcome::Failed(RequestError::Timeout(30_000)));
        assert!(!submit.is_disabled());
        assert_eq!(
            page.sink.last(),
            Some((AlertLevel::Danger, GENERIC_ERROR.to_string()))
        );
    }

    #[test]
    fn test_success_without_data_fails_closed() {
        let page = TestPage::new(
            FakeTransport::replying(r#"{"success": true, "message": "ok"}"#),
            true,
        );
        let submit = FakeButton::new("Enviar", &[]);
        let chat = FakeChat::default();

        let outcome = block_on(send_message(&page.ctx, submission("hola"), &submit, &chat));

        assert!(matches!(outcome, Outcome::Failed(RequestError::Malformed(_))));
        assert!(chat.entries.borrow().is_empty());
        assert!(!chat.input_cleared.get());
    }

    #[test]
    fn test_markup_in_message_renders_literally() {
        let message = ChatMessage {
            message: "<script>alert(1)</script> & <b>bold</b>".into(),
            created_at: "2026-10-16T14:05:00".into(),
        };
        let html = render_chat_entry(&message, &FixedOffset::east_opt(0).unwrap());

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains(
            "&lt;script&gt;alert(1)&lt;/script&gt; &amp; &lt;b&gt;bold&lt;/b&gt;"
        ));
        assert!(html.contains(r#"<div class="chat-message-author">Tú</div>"#));
    }

    #[test]
    fn test_unparsable_timestamp_is_escaped() {
        let message = ChatMessage {
            message: "hola".into(),
            created_at: "<now>".into(),
        };
        let html = render_chat_entry(&message, &FixedOffset::east_opt(0).unwrap());
        assert!(html.contains(r#"<div class="chat-message-time">&lt;now&gt;</div>"#));
    }
}
