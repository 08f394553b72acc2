//! Утилиты форматирования даты и времени для чата.
//!
//! Формат повторяет `toLocaleString('es-ES', { day: '2-digit', month: 'short',
//! year: 'numeric', hour: '2-digit', minute: '2-digit' })`.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, Timelike, Utc};
use wasm_bindgen::JsValue;

const MONTHS_ES_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Local time zone: the UTC offset in force at a given instant.
pub trait LocalZone {
    fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset;
}

impl LocalZone for FixedOffset {
    fn offset_at(&self, _instant: DateTime<Utc>) -> FixedOffset {
        *self
    }
}

/// The browser's time zone, asked per instant so DST transitions apply.
pub struct BrowserZone;

impl LocalZone for BrowserZone {
    fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        // getTimezoneOffset is minutes *behind* UTC
        let ms = JsValue::from_f64(instant.timestamp_millis() as f64);
        let minutes = js_sys::Date::new(&ms).get_timezone_offset() as i32;
        FixedOffset::west_opt(minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

/// Parse a server timestamp into local wall-clock time.
///
/// Timestamps with an explicit offset are converted with the offset `zone`
/// had at that instant; naive ones are taken as already local.
pub fn parse_timestamp(raw: &str, zone: &dyn LocalZone) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        let instant = dt.with_timezone(&Utc);
        return Some(instant.with_timezone(&zone.offset_at(instant)).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Format a chat timestamp, e.g. "2026-10-16T14:05:00" -> "16 oct 2026, 14:05".
/// Unparsable input is returned unchanged.
pub fn format_chat_timestamp(raw: &str, zone: &dyn LocalZone) -> String {
    match parse_timestamp(raw, zone) {
        Some(dt) => format!(
            "{:02} {} {}, {:02}:{:02}",
            dt.day(),
            MONTHS_ES_SHORT[dt.month0() as usize],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => raw.to_string(),
    }
}

/// Like `parse_timestamp`, also accepting a bare `YYYY-MM-DD` as local midnight.
fn parse_date_or_timestamp(raw: &str, zone: &dyn LocalZone) -> Option<NaiveDateTime> {
    parse_timestamp(raw, zone).or_else(|| {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    })
}

/// `dd/mm/yyyy`, as `toLocaleDateString('es-ES')` with 2-digit fields.
pub fn format_short_date(raw: &str, zone: &dyn LocalZone) -> String {
    match parse_date_or_timestamp(raw, zone) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// `dd/mm/yyyy, HH:MM`
pub fn format_short_date_time(raw: &str, zone: &dyn LocalZone) -> String {
    match parse_date_or_timestamp(raw, zone) {
        Some(dt) => dt.format("%d/%m/%Y, %H:%M").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_hours(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).unwrap()
    }

    #[test]
    fn test_naive_timestamp_is_local() {
        assert_eq!(
            format_chat_timestamp("2026-10-16T14:05:33.123456", &offset_hours(-3)),
            "16 oct 2026, 14:05"
        );
    }

    #[test]
    fn test_offset_timestamp_is_converted() {
        assert_eq!(
            format_chat_timestamp("2026-01-05T02:30:00+00:00", &offset_hours(-3)),
            "04 ene 2026, 23:30"
        );
    }

    #[test]
    fn test_space_separated_timestamp() {
        assert_eq!(
            format_chat_timestamp("2025-09-01 09:07:00", &offset_hours(0)),
            "01 sept 2025, 09:07"
        );
    }

    /// Zone switching from `before` to `after` at `cutover`.
    struct Cutover {
        cutover: DateTime<Utc>,
        before: FixedOffset,
        after: FixedOffset,
    }

    impl LocalZone for Cutover {
        fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
            if instant < self.cutover {
                self.before
            } else {
                self.after
            }
        }
    }

    #[test]
    fn test_offset_follows_each_timestamp() {
        let zone = Cutover {
            cutover: DateTime::parse_from_rfc3339("2026-03-29T01:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            before: offset_hours(1),
            after: offset_hours(2),
        };
        assert_eq!(
            format_chat_timestamp("2026-03-28T12:00:00Z", &zone),
            "28 mar 2026, 13:00"
        );
        assert_eq!(
            format_chat_timestamp("2026-03-30T12:00:00Z", &zone),
            "30 mar 2026, 14:00"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_chat_timestamp("ayer", &offset_hours(0)), "ayer");
        assert_eq!(format_short_date("ayer", &offset_hours(0)), "ayer");
        assert_eq!(format_short_date_time("", &offset_hours(0)), "");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(format_short_date("2026-03-05", &offset_hours(-3)), "05/03/2026");
        assert_eq!(
            format_short_date("2026-01-01T01:00:00Z", &offset_hours(-3)),
            "31/12/2025"
        );
    }

    #[test]
    fn test_short_date_time() {
        assert_eq!(
            format_short_date_time("2026-10-16 09:05:00", &offset_hours(2)),
            "16/10/2026, 09:05"
        );
        assert_eq!(
            format_short_date_time("2026-10-16T12:30:00+00:00", &offset_hours(2)),
            "16/10/2026, 14:30"
        );
        assert_eq!(format_short_date_time("2026-10-16", &offset_hours(0)), "16/10/2026, 00:00");
    }
}
