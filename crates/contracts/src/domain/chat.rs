use serde::{Deserialize, Serialize};

use crate::shared::envelope::Envelope;

/// Сообщение чата в том виде, в каком сервер возвращает его после сохранения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message: String,
    /// ISO 8601, с часовым поясом или без него.
    pub created_at: String,
}

/// Response of `POST <chat-form-action>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<ChatMessage>,
}

impl Envelope for ChatResponse {
    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Name of the form field carrying the message text.
pub const MESSAGE_FIELD: &str = "message";
