//! HTTP plumbing between the page and the server.
//!
//! Operations build an `ApiRequest`, hand it to a `Transport` and decode the
//! raw reply with `decode_reply`. The browser transport is `GlooTransport`.

use async_trait::async_trait;
use contracts::shared::envelope::Envelope;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use std::future::Future;
use web_sys::{AbortController, AbortSignal};

use crate::shared::error::RequestError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body; sent with a JSON content type like the toggle endpoints expect.
    Empty,
    /// Form fields in document order, sent url-encoded.
    Form(Vec<(String, String)>),
}

/// A state-changing request. Always `POST`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn form(url: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            url: url.into(),
            body: RequestBody::Form(fields),
        }
    }
}

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<HttpReply, RequestError>;
}

/// Encode form fields as `application/x-www-form-urlencoded`.
pub fn encode_form(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode an envelope from a reply.
///
/// A non-2xx reply is still decoded when it carries a refusal envelope, so the
/// server's own message reaches the user. Anything else non-2xx is a failure.
pub fn decode_reply<T>(reply: &HttpReply) -> Result<T, RequestError>
where
    T: DeserializeOwned + Envelope,
{
    match serde_json::from_str::<T>(&reply.body) {
        Ok(envelope) if reply.is_success_status() || !envelope.is_success() => Ok(envelope),
        Ok(_) => Err(RequestError::Status(reply.status)),
        Err(_) if !reply.is_success_status() => Err(RequestError::Status(reply.status)),
        Err(e) => Err(RequestError::Decode(e.to_string())),
    }
}

/// Race `fetch` against `timer`.
///
/// When the timer wins, `abort` is called and `fetch` is still awaited until
/// it settles: callers hold their control disabled for as long as the browser
/// request is alive. A reply that lands despite the abort is returned as is.
pub async fn with_timeout<F, T, A>(
    fetch: F,
    timer: T,
    abort: A,
    timeout_ms: u32,
) -> Result<HttpReply, RequestError>
where
    F: Future<Output = Result<HttpReply, RequestError>>,
    T: Future<Output = ()>,
    A: FnOnce(),
{
    let fetch = Box::pin(fetch);
    let timer = Box::pin(timer);
    match future::select(fetch, timer).await {
        Either::Left((reply, _)) => reply,
        Either::Right(((), fetch)) => {
            abort();
            match fetch.await {
                Ok(reply) => Ok(reply),
                Err(_) => Err(RequestError::Timeout(timeout_ms)),
            }
        }
    }
}

/// Browser transport on top of `fetch`, with an optional timeout.
pub struct GlooTransport {
    timeout_ms: Option<u32>,
}

impl GlooTransport {
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }

    async fn fetch(
        request: &ApiRequest,
        signal: Option<&AbortSignal>,
    ) -> Result<HttpReply, RequestError> {
        let builder = Request::post(&request.url).abort_signal(signal);
        let response = match &request.body {
            RequestBody::Empty => builder
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| RequestError::Network(e.to_string()))?,
            RequestBody::Form(fields) => builder
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(encode_form(fields))
                .map_err(|e| RequestError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| RequestError::Network(e.to_string()))?,
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: &ApiRequest) -> Result<HttpReply, RequestError> {
        let Some(timeout_ms) = self.timeout_ms else {
            return Self::fetch(request, None).await;
        };

        let controller = AbortController::new()
            .map_err(|e| RequestError::Network(format!("AbortController: {:?}", e)))?;
        let signal = controller.signal();
        with_timeout(
            Self::fetch(request, Some(&signal)),
            TimeoutFuture::new(timeout_ms),
            || controller.abort(),
            timeout_ms,
        )
        .await
    }
}
