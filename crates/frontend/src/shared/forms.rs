//! Form handling shared by all pages: field collection, native validation
//! and number formatting.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlFormElement, HtmlInputElement};

use crate::shared::dom::{listen, query_all, query_in};

/// Snapshot of a form at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    pub action: String,
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    /// First value of the field `name`, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Collect the form's successful controls in document order.
    /// File inputs are skipped.
    pub fn from_form(form: &HtmlFormElement) -> Result<Self, JsValue> {
        let data = web_sys::FormData::new_with_form(form)?;
        let mut fields = Vec::new();
        if let Some(entries) = js_sys::try_iter(&data)? {
            for entry in entries {
                let pair: js_sys::Array = entry?.dyn_into()?;
                if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string())
                {
                    fields.push((name, value));
                }
            }
        }
        Ok(Self {
            action: form.action(),
            fields,
        })
    }
}

/// Submit button of a form.
pub fn submit_button(form: &HtmlFormElement) -> Option<web_sys::Element> {
    query_in(form, r#"button[type="submit"]"#)
}

/// Block submission of invalid forms and mark every submitted form as
/// validated so Bootstrap shows the feedback styles.
pub fn init_validation(document: &Document) {
    for element in query_all(document, "form") {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let target = form.clone();
        listen(&form, "submit", move |event| {
            if !target.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            let _ = target.class_list().add_1("was-validated");
        });
    }
}

/// Value to write back into a number input on blur, if any.
///
/// Inputs with `step="0.01"` get exactly two decimals; anything else, empty
/// or non-numeric is left alone.
pub fn format_on_blur(value: &str, step: &str) -> Option<String> {
    if step != "0.01" {
        return None;
    }
    let number: f64 = value.trim().parse().ok()?;
    if !number.is_finite() {
        return None;
    }
    Some(format!("{:.2}", number))
}

pub fn init_number_formatting(document: &Document) {
    for element in query_all(document, r#"input[type="number"]"#) {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let target = input.clone();
        listen(&input, "blur", move |_| {
            if let Some(formatted) = format_on_blur(&target.value(), &target.step()) {
                target.set_value(&formatted);
            }
        });
    }
}
