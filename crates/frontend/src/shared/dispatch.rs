//! Send a request, decode the envelope, report failures.

use contracts::shared::envelope::Envelope;
use serde::de::DeserializeOwned;

use crate::shared::context::PageContext;
use crate::shared::error::RequestError;
use crate::shared::http::{decode_reply, ApiRequest};
use crate::shared::notify::AlertLevel;

/// How an action ended. Every variant leaves its control enabled.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The user declined the confirmation.
    Cancelled,
    /// The control already had a request in flight.
    Busy,
    /// Client-side validation rejected the input; nothing was sent.
    Invalid,
    /// The server accepted the change and the page reflects it.
    Completed,
    /// The server answered `success: false` with this message.
    Refused(String),
    /// Transport, decoding or envelope failure.
    Failed(RequestError),
}

/// Send `request` and decode the reply as `T`.
pub async fn dispatch<T>(ctx: &PageContext, request: &ApiRequest) -> Result<T, RequestError>
where
    T: DeserializeOwned + Envelope,
{
    log::debug!("POST {}", request.url);
    let reply = ctx.transport.send(request).await?;
    decode_reply(&reply)
}

/// Report a transport-class failure with a generic message.
pub fn fail(ctx: &PageContext, url: &str, error: RequestError, user_message: &str) -> Outcome {
    log::error!("POST {} failed: {}", url, error);
    ctx.notifier.notify(AlertLevel::Danger, user_message);
    Outcome::Failed(error)
}

/// Report a `success: false` answer with the server's own message.
pub fn refuse(ctx: &PageContext, url: &str, message: String) -> Outcome {
    log::warn!("POST {} refused: {}", url, message);
    ctx.notifier.notify(AlertLevel::Danger, &message);
    Outcome::Refused(message)
}
