//! Services shared by every action on the page, built once at start-up.

use std::rc::Rc;

use crate::shared::date_utils::LocalZone;
use crate::shared::http::Transport;
use crate::shared::notify::NotificationSink;

/// Blocking yes/no question put to the user.
pub trait ConfirmGate {
    fn confirm(&self, prompt: &str) -> bool;
}

/// `window.confirm`. A page without a window never confirms.
pub struct BrowserConfirm;

impl ConfirmGate for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

#[derive(Clone)]
pub struct PageContext {
    pub transport: Rc<dyn Transport>,
    pub notifier: Rc<dyn NotificationSink>,
    pub confirm: Rc<dyn ConfirmGate>,
    /// Time zone server timestamps are rendered in.
    pub local_zone: Rc<dyn LocalZone>,
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::shared::http::testing::FakeTransport;
    use crate::shared::notify::testing::RecordingSink;
    use chrono::FixedOffset;
    use std::cell::RefCell;

    /// Answers every question the same way and records the prompts.
    pub struct FixedAnswer {
        pub answer: bool,
        pub asked: RefCell<Vec<String>>,
    }

    impl FixedAnswer {
        pub fn new(answer: bool) -> Self {
            Self {
                answer,
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl ConfirmGate for FixedAnswer {
        fn confirm(&self, prompt: &str) -> bool {
            self.asked.borrow_mut().push(prompt.to_string());
            self.answer
        }
    }

    /// Context over fakes, with handles kept for assertions.
    pub struct TestPage {
        pub transport: Rc<FakeTransport>,
        pub sink: Rc<RecordingSink>,
        pub gate: Rc<FixedAnswer>,
        pub ctx: PageContext,
    }

    impl TestPage {
        pub fn new(transport: FakeTransport, confirm: bool) -> Self {
            let transport = Rc::new(transport);
            let sink = Rc::new(RecordingSink::default());
            let gate = Rc::new(FixedAnswer::new(confirm));
            let ctx = PageContext {
                transport: transport.clone(),
                notifier: sink.clone(),
                confirm: gate.clone(),
                local_zone: Rc::new(FixedOffset::east_opt(0).unwrap()),
            };
            Self {
                transport,
                sink,
                gate,
                ctx,
            }
        }
    }
}
