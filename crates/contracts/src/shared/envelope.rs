//! Uniform response envelope returned by every state-changing endpoint.
//!
//! The server always answers with `{ "success": bool, "message": string, ... }`.
//! `success` is mandatory: a body without it fails to deserialize, which the
//! client treats as a transport-class failure instead of guessing a state.

use serde::{Deserialize, Serialize};

/// Common accessors over all envelope shapes.
pub trait Envelope {
    fn is_success(&self) -> bool;
    fn message(&self) -> &str;
}

/// Bare envelope without payload (rating submissions, deletions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl Envelope for ApiResponse {
    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> &str {
        &self.message
    }
}
