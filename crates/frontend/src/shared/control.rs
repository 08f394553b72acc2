//! Triggering controls and the guard that keeps them honest.
//!
//! Every async action disables the control that started it and must re-enable
//! it on every exit path. `BusyGuard` does the re-enabling in `Drop`, so early
//! returns and `?` can't leave a button stuck.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement};

use crate::shared::html::escape_html;

/// Anything with a class list.
pub trait Styled {
    fn set_class(&self, class: &str, present: bool);
}

/// A clickable control: a toggle button or a form's submit button.
pub trait Control: Styled {
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
    /// Current inner markup, icons included.
    fn markup(&self) -> String;
    fn set_markup(&self, html: &str);
    /// Replace the content with plain text.
    fn set_label(&self, text: &str);
    /// Replace the label with a spinner followed by `text`.
    fn show_busy(&self, text: &str);
}

/// What a released control shows again.
enum Release {
    Markup(String),
    Label(String),
}

/// Disables a control for the lifetime of the guard.
pub struct BusyGuard<'a, C: Control + ?Sized> {
    control: &'a C,
    release: Option<Release>,
}

impl<'a, C: Control + ?Sized> BusyGuard<'a, C> {
    /// Disable `control`. With a busy label the current markup is remembered
    /// and put back on release unless `set_final_label` overrides it.
    pub fn engage(control: &'a C, busy_label: Option<&str>) -> Self {
        let release = busy_label.map(|busy| {
            let original = control.markup();
            control.show_busy(busy);
            Release::Markup(original)
        });
        control.set_disabled(true);
        Self { control, release }
    }

    pub fn control(&self) -> &C {
        self.control
    }

    /// Label to show once the control is released.
    pub fn set_final_label(&mut self, label: impl Into<String>) {
        self.release = Some(Release::Label(label.into()));
    }
}

impl<C: Control + ?Sized> Drop for BusyGuard<'_, C> {
    fn drop(&mut self) {
        match self.release.take() {
            Some(Release::Markup(html)) => self.control.set_markup(&html),
            Some(Release::Label(text)) => self.control.set_label(&text),
            None => {}
        }
        self.control.set_disabled(false);
    }
}

// ── DOM adapters ─────────────────────────────────────────────────────────────

/// Any element whose classes we flip (toggle cards).
pub struct DomStyled(pub Element);

impl Styled for DomStyled {
    fn set_class(&self, class: &str, present: bool) {
        let _ = self.0.class_list().toggle_with_force(class, present);
    }
}

pub struct DomButton(pub HtmlButtonElement);

impl DomButton {
    /// Wrap an element if it really is a `<button>`.
    pub fn from_element(element: Element) -> Option<Self> {
        element.dyn_into::<HtmlButtonElement>().ok().map(Self)
    }
}

impl Styled for DomButton {
    fn set_class(&self, class: &str, present: bool) {
        let _ = self.0.class_list().toggle_with_force(class, present);
    }
}

impl Control for DomButton {
    fn is_disabled(&self) -> bool {
        self.0.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }

    fn markup(&self) -> String {
        self.0.inner_html()
    }

    fn set_markup(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_label(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn show_busy(&self, text: &str) {
        self.0.set_inner_html(&format!(
            r#"<span class="spinner-border spinner-border-sm me-1"></span>{}"#,
            escape_html(text)
        ));
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeButton;
    use super::*;

    #[test]
    fn test_guard_reenables_on_drop() {
        let button = FakeButton::new("Enviar", &[]);
        {
            let _guard = BusyGuard::engage(&button, None);
            assert!(button.is_disabled());
            assert_eq!(button.label(), "Enviar");
        }
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_guard_restores_original_label() {
        let button = FakeButton::new("Deshabilitar", &[]);
        {
            let _guard = BusyGuard::engage(&button, Some("Procesando..."));
            assert_eq!(button.busy.borrow().as_deref(), Some("Procesando..."));
        }
        assert_eq!(button.label(), "Deshabilitar");
        assert!(button.busy.borrow().is_none());
    }

    #[test]
    fn test_guard_restores_icon_markup() {
        let markup = r#"<i class="bi bi-send"></i> Enviar"#;
        let button = FakeButton::new(markup, &[]);
        {
            let _guard = BusyGuard::engage(&button, Some("Enviando..."));
            assert_eq!(button.label(), "");
        }
        assert_eq!(button.markup(), markup);
        assert_eq!(button.label(), "Enviar");
    }

    #[test]
    fn test_final_label_overrides_original() {
        let button = FakeButton::new("Deshabilitar", &[]);
        {
            let mut guard = BusyGuard::engage(&button, Some("Procesando..."));
            guard.set_final_label("Habilitar");
        }
        assert_eq!(button.label(), "Habilitar");
        assert!(!button.is_disabled());
    }
}
