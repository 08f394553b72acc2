//! Failures of a single request/response round trip.

use thiserror::Error;

/// Everything that can go wrong between sending a request and holding a
/// decoded envelope. The user only ever sees a generic message for these;
/// the detail goes to the console log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server answered with HTTP {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("malformed response: {0}")]
    Malformed(&'static str),

    #[error("no response after {0} ms")]
    Timeout(u32),
}
