//! Error types for webhook delivery.

use thiserror::Error;

use crate::validate::{WEBHOOK_URL_OFFICE365_PREFIX, WEBHOOK_URL_OFFICE_COM_PREFIX};

/// Input rejected before any network activity.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The webhook URL is not a parseable URL at all.
    #[error("unable to parse webhook URL {url:?}: {source}")]
    UrlParse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The webhook URL parsed, but its scheme and host do not match
    /// either known Teams webhook prefix.
    #[error(
        "webhook URL does not contain expected prefix; got {got:?}, \
         expected one of {WEBHOOK_URL_OFFICE_COM_PREFIX:?} or {WEBHOOK_URL_OFFICE365_PREFIX:?}"
    )]
    UrlPrefix { got: String },

    /// Both text-bearing fields of the card are empty. The webhook
    /// service would reject such a card with `400 Bad Request`.
    #[error("invalid message card: summary or text field is required")]
    MissingText,
}

/// Error type for the underlying HTTP transport.
///
/// Describes what went wrong at the network level without dictating
/// recovery strategy. Surfaced to callers wrapped in
/// [`SendError::Transport`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused, TLS
    /// handshake failures, and other network-level errors.
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not respond within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The URL was rejected while building the concrete request.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// The outcome of one delivery attempt.
///
/// Every failure mode is a distinct variant so callers can branch on
/// kind rather than message text, e.g. backing off on
/// [`TooManyRequests`](Self::TooManyRequests). No variant is retried
/// internally.
#[derive(Debug, Error)]
pub enum SendError {
    /// The webhook URL or the message card failed validation; the
    /// transport was never invoked.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Serializing the card or assembling the request failed.
    #[error("failed to build request: {0}")]
    RequestConstruction(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport could not complete the exchange.
    #[error("failed to make request [{method}:{url}]: {source}")]
    Transport {
        method: http::Method,
        url: String,
        #[source]
        source: HttpError,
    },

    /// The webhook URL resolved to nothing (status 404).
    #[error("the requested resource was not found")]
    NotFound,

    /// The webhook rejected the caller's credentials (status 401 or 403).
    #[error("you do not have access to the requested resource")]
    UserAccessDenied,

    /// The webhook's throttle limit was exceeded (status 429).
    #[error("you have exceeded the webhook throttle limit")]
    TooManyRequests,

    /// Any other non-success status.
    #[error("failed to do request, {} status code received", .0.as_u16())]
    UnexpectedStatus(http::StatusCode),

    /// The response body could not be parsed into the requested shape.
    /// Carries the raw body so malformed server responses can be
    /// diagnosed from the error alone.
    #[error("could not parse response body: {source} [{method}:{url}] {body}")]
    Decode {
        method: http::Method,
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}
