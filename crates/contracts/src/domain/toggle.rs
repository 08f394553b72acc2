use serde::{Deserialize, Serialize};

use crate::shared::envelope::Envelope;

/// Response of `POST /toggle_{kind}/{id}`.
///
/// `enabled` is only meaningful when `success` is true; a successful response
/// without it cannot be applied to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl ToggleResponse {
    /// New enabled state carried by a successful response.
    pub fn new_state(&self) -> Option<bool> {
        if self.success {
            self.enabled
        } else {
            None
        }
    }
}

impl Envelope for ToggleResponse {
    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> &str {
        &self.message
    }
}
