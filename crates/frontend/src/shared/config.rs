//! Client configuration.
//!
//! The server template sets `data-*` attributes on `<body>`; anything missing
//! or unparsable falls back to the defaults below.

use std::str::FromStr;

pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;
pub const DEFAULT_ALERT_DISMISS_MS: u32 = 5_000;

const ATTR_LOG_LEVEL: &str = "data-log-level";
const ATTR_REQUEST_TIMEOUT: &str = "data-request-timeout-ms";
const ATTR_ALERT_DISMISS: &str = "data-alert-dismiss-ms";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub log_level: log::Level,
    /// `None` disables the timeout entirely.
    pub request_timeout_ms: Option<u32>,
    pub alert_dismiss_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: log::Level::Debug,
            request_timeout_ms: Some(DEFAULT_REQUEST_TIMEOUT_MS),
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
        }
    }
}

impl ClientConfig {
    /// Build the config from an attribute lookup.
    ///
    /// Returns the config plus the attributes that were present but invalid,
    /// so the caller can report them once logging is up.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(raw) = lookup(ATTR_LOG_LEVEL) {
            match log::Level::from_str(raw.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => rejected.push(format!("{}={}", ATTR_LOG_LEVEL, raw)),
            }
        }

        if let Some(raw) = lookup(ATTR_REQUEST_TIMEOUT) {
            match raw.trim().parse::<u32>() {
                Ok(0) => config.request_timeout_ms = None,
                Ok(ms) => config.request_timeout_ms = Some(ms),
                Err(_) => rejected.push(format!("{}={}", ATTR_REQUEST_TIMEOUT, raw)),
            }
        }

        if let Some(raw) = lookup(ATTR_ALERT_DISMISS) {
            match raw.trim().parse::<u32>() {
                Ok(ms) => config.alert_dismiss_ms = ms,
                Err(_) => rejected.push(format!("{}={}", ATTR_ALERT_DISMISS, raw)),
            }
        }

        (config, rejected)
    }

    /// Read the config from `<body>`; defaults when there is no document yet.
    pub fn from_document() -> (Self, Vec<String>) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Self::from_lookup(|name| body.get_attribute(name)),
            None => (Self::default(), Vec::new()),
        }
    }
}
