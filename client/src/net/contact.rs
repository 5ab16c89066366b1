//! Contact-form HTTP boundary.
//!
//! Client-side (hydrate): `POST {API_BASE}/contact` via `gloo-net`.
//! Server-side (SSR): the transport reports `SubmitError::Unknown` since a
//! submission only happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is folded into `SubmitError` here, at the boundary, so the
//! form state never inspects transport errors or response bodies itself.
//! "No response" is read from the HTTP client's error model: a rejected
//! `fetch` surfaces as `gloo_net::Error::JsError`, which maps to
//! `TransportFailure::NoResponse`. An unreadable response body is treated
//! as empty, so only its status decides the outcome.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use async_trait::async_trait;

use super::api;
use super::types::{ContactPayload, ErrorBody};

/// Address offered when the form cannot deliver a message.
pub const FALLBACK_EMAIL: &str = "anane365221@gmail.com";

/// Why a submission attempt failed. `Display` is the user-facing advisory.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The backend answered with a structured error detail.
    #[error("Error: {0}")]
    ServerRejected(String),
    /// No response reached the browser.
    #[error("Network error: please check if the backend server is running")]
    NetworkUnavailable,
    /// Anything else: unexpected status, unreadable body, request build failure.
    #[error("Error sending message. Please try again or email me directly at {addr}", addr = FALLBACK_EMAIL)]
    Unknown,
}

/// Sends one contact payload and reports a classified outcome.
#[async_trait(?Send)]
pub trait ContactTransport {
    /// Issue exactly one request for `payload`. Implementations never retry.
    async fn send_contact(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

/// Classify a received HTTP response.
///
/// Any 2xx is success. Otherwise a JSON body with a non-empty string
/// `detail` becomes `ServerRejected`; everything else is `Unknown`.
pub fn classify_response(status: u16, body: &str) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail_text().map(str::to_owned));
    match detail {
        Some(detail) => Err(SubmitError::ServerRejected(detail)),
        None => Err(SubmitError::Unknown),
    }
}

/// How a request failed before any response was read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportFailure {
    /// `fetch` rejected: connection refused, DNS, CORS.
    NoResponse,
    /// The payload or a response body could not be (de)serialized.
    Serde,
    /// Any other client-side failure, e.g. building the request.
    Client,
}

/// Classify a failure that happened before a response was received.
pub fn classify_transport_failure(failure: TransportFailure) -> SubmitError {
    match failure {
        TransportFailure::NoResponse => SubmitError::NetworkUnavailable,
        TransportFailure::Serde | TransportFailure::Client => SubmitError::Unknown,
    }
}

#[cfg(feature = "hydrate")]
impl From<&gloo_net::Error> for TransportFailure {
    fn from(err: &gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(_) => Self::NoResponse,
            gloo_net::Error::SerdeError(_) => Self::Serde,
            gloo_net::Error::GlooError(_) => Self::Client,
        }
    }
}

/// `fetch`-backed transport pointed at the backend contact endpoint.
#[derive(Clone, Debug)]
pub struct HttpContactTransport {
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpContactTransport {
    fn default() -> Self {
        Self::new(api::contact_endpoint())
    }
}

#[async_trait(?Send)]
impl ContactTransport for HttpContactTransport {
    async fn send_contact(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.endpoint)
                .json(payload)
                .map_err(|e| {
                    log::warn!("contact request build failed: {e}");
                    classify_transport_failure(TransportFailure::from(&e))
                })?;
            let resp = match request.send().await {
                Ok(resp) => resp,
                Err(e) => {
                    log::warn!("contact request failed: {e}");
                    return Err(classify_transport_failure(TransportFailure::from(&e)));
                }
            };
            let status = resp.status();
            let body = resp.text().await.unwrap_or_else(|e| {
                log::warn!("contact response body unreadable: {e}");
                String::new()
            });
            let outcome = classify_response(status, &body);
            match &outcome {
                Ok(()) => log::info!("contact form submitted: {status}"),
                Err(e) => log::warn!("contact form rejected ({status}): {e}"),
            }
            outcome
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(SubmitError::Unknown)
        }
    }
}
