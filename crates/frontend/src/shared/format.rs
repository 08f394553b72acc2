//! Helpers exported to page scripts: es-AR numbers and currency, es-ES
//! dates, and a loading overlay for any element.
//!
//! Numbers go through `Intl.NumberFormat`; the Rust rendition below is used
//! when `Intl` is missing or refuses the input.

use js_sys::{Array, Intl, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::shared::date_utils::{format_short_date, format_short_date_time, BrowserZone};

pub const LOCALE: &str = "es-AR";
pub const DEFAULT_CURRENCY: &str = "USD";

pub const LOADING_CLASS: &str = "loading";
pub const OVERLAY_CLASS: &str = "loading-overlay";
const OVERLAY_MARKUP: &str = r#"<div class="spinner-border text-primary"></div>"#;

const NBSP: char = '\u{a0}';

/// `Intl.NumberFormat` default for plain numbers.
const NUMBER_MAX_FRACTION: usize = 3;
const CURRENCY_FRACTION: usize = 2;

/// ISO 4217 shape: three ASCII letters, normalised to upper case.
pub fn currency_code(raw: &str) -> Option<String> {
    let code = raw.trim();
    (code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| code.to_ascii_uppercase())
}

/// How es-AR writes a currency in front of the amount.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "ARS" => "$",
        "USD" => "US$",
        "EUR" => "€",
        "BRL" => "R$",
        other => other,
    }
}

/// es-AR grouping: `.` for thousands, `,` for decimals.
///
/// Rounds to `max_fraction` digits and drops trailing zeros down to
/// `min_fraction`.
pub fn es_ar_number(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut fraction = fraction.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let is_zero = integer.chars().all(|c| c == '0') && fraction.chars().all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, fraction)
    }
}

/// `US$ 1.234,50`, `-$ 12,00`
pub fn es_ar_currency(amount: f64, code: &str) -> String {
    let number = es_ar_number(amount.abs(), CURRENCY_FRACTION, CURRENCY_FRACTION);
    let sign = if amount < 0.0 && number.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    format!("{}{}{}{}", sign, currency_symbol(code), NBSP, number)
}

fn intl_format(value: f64, options: &[(&str, &str)]) -> Option<String> {
    if !Reflect::has(&js_sys::global(), &JsValue::from_str("Intl")).unwrap_or(false) {
        return None;
    }
    let locales = Array::of1(&JsValue::from_str(LOCALE));
    let opts = Object::new();
    for (key, val) in options {
        Reflect::set(&opts, &JsValue::from_str(key), &JsValue::from_str(val)).ok()?;
    }
    Intl::NumberFormat::new(&locales, &opts)
        .format()
        .call1(&JsValue::UNDEFINED, &JsValue::from_f64(value))
        .ok()?
        .as_string()
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64, currency: Option<String>) -> String {
    let raw = currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
    let Some(code) = currency_code(&raw) else {
        log::warn!("formatCurrency: invalid currency code {:?}", raw);
        return es_ar_currency(amount, raw.trim());
    };
    intl_format(amount, &[("style", "currency"), ("currency", &code)])
        .unwrap_or_else(|| es_ar_currency(amount, &code))
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(number: f64) -> String {
    intl_format(number, &[]).unwrap_or_else(|| es_ar_number(number, 0, NUMBER_MAX_FRACTION))
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date_string: &str) -> String {
    format_short_date(date_string, &BrowserZone)
}

#[wasm_bindgen(js_name = formatDateTime)]
pub fn format_date_time(date_string: &str) -> String {
    format_short_date_time(date_string, &BrowserZone)
}

/// Cover `element` with a spinner overlay.
#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: &HtmlElement) -> Result<(), JsValue> {
    element.class_list().add_1(LOADING_CLASS)?;

    let document = element
        .owner_document()
        .ok_or_else(|| JsValue::from_str("element is not attached to a document"))?;
    let overlay = document.create_element("div")?;
    overlay.set_class_name(OVERLAY_CLASS);
    overlay.set_inner_html(OVERLAY_MARKUP);

    element.style().set_property("position", "relative")?;
    element.append_child(&overlay)?;
    Ok(())
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading(element: &HtmlElement) -> Result<(), JsValue> {
    element.class_list().remove_1(LOADING_CLASS)?;
    if let Some(overlay) = element.query_selector(&format!(".{}", OVERLAY_CLASS))? {
        overlay.remove();
    }
    Ok(())
}
