//! Notification banners (Bootstrap alerts).
//!
//! Components never look up the alert container themselves: the page builds
//! one `NotificationSink` at start-up and passes it around in `PageContext`.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::shared::bootstrap;
use crate::shared::html::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertLevel {
    /// Bootstrap contextual suffix, as in `alert-{suffix}`.
    pub fn css_suffix(&self) -> &'static str {
        match self {
            AlertLevel::Success => "success",
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
            AlertLevel::Danger => "danger",
        }
    }
}

pub trait NotificationSink {
    fn notify(&self, level: AlertLevel, message: &str);
}

/// Class attribute of a banner.
pub fn alert_class(level: AlertLevel) -> String {
    format!(
        "alert alert-{} alert-dismissible fade show",
        level.css_suffix()
    )
}

/// Inner markup of a banner: the escaped message plus a close button.
pub fn alert_inner_html(message: &str) -> String {
    format!(
        r#"{}<button type="button" class="btn-close" data-bs-dismiss="alert"></button>"#,
        escape_html(message)
    )
}

/// Banners prepended to `.alert-container` (or `main`), closed after a delay.
pub struct DomAlertSink {
    document: Document,
    container: Option<Element>,
    dismiss_ms: u32,
}

impl DomAlertSink {
    pub fn attach(document: &Document, dismiss_ms: u32) -> Self {
        let container = document
            .query_selector(".alert-container")
            .ok()
            .flatten()
            .or_else(|| document.query_selector("main").ok().flatten());
        if container.is_none() {
            log::warn!("no .alert-container or <main> found; notifications go to the console only");
        }
        Self {
            document: document.clone(),
            container,
            dismiss_ms,
        }
    }
}

impl NotificationSink for DomAlertSink {
    fn notify(&self, level: AlertLevel, message: &str) {
        let Some(container) = &self.container else {
            log::info!("[{}] {}", level.css_suffix(), message);
            return;
        };
        let Ok(alert) = self.document.create_element("div") else {
            return;
        };
        alert.set_class_name(&alert_class(level));
        alert.set_inner_html(&alert_inner_html(message));
        if let Err(e) = container.insert_adjacent_element("afterbegin", &alert) {
            log::error!("failed to insert alert: {:?}", e);
            return;
        }

        Timeout::new(self.dismiss_ms, move || bootstrap::close_alert(&alert)).forget();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_class() {
        assert_eq!(
            alert_class(AlertLevel::Danger),
            "alert alert-danger alert-dismissible fade show"
        );
    }

    #[test]
    fn test_alert_message_is_escaped() {
        let html = alert_inner_html("<b>Inversión</b> habilitada");
        assert!(html.starts_with("&lt;b&gt;Inversión&lt;/b&gt; habilitada"));
        assert!(html.ends_with(r#"data-bs-dismiss="alert"></button>"#));
    }
}
