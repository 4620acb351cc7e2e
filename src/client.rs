//! Teams webhook client façade.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::card::MessageCard;
use crate::error::SendError;
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::trace;
use crate::transport::ReqwestTransport;
use crate::validate;

/// Timeout applied when [`Options::timeout`] is zero or unset.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CONTENT_TYPE_JSON: &str = "application/json;charset=utf-8";

/// Client configuration.
///
/// Fixed at construction; every send issued through the client reads
/// the same values.
#[derive(Debug, Clone)]
pub struct Options {
    /// Upper bound on one delivery attempt. Zero means
    /// [`DEFAULT_TIMEOUT`].
    pub timeout: Duration,
    /// When true, the full outgoing request and incoming response
    /// (headers and body) are emitted at debug level. Diagnostics
    /// only; never affects what is sent.
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
        }
    }
}

impl Options {
    fn normalized(mut self) -> Self {
        if self.timeout.is_zero() {
            self.timeout = DEFAULT_TIMEOUT;
        }
        self
    }
}

/// Client for posting [`MessageCard`]s to Teams webhook URLs.
///
/// Holds only immutable configuration and the injected transport, so
/// one instance may be shared freely across tasks. Each
/// [`send`](Self::send) is a single synchronous delivery attempt with
/// no internal retry.
///
/// # Example
///
/// ```no_run
/// use teams_webhook::{Client, MessageCard, Options};
///
/// # async fn example() -> Result<(), teams_webhook::SendError> {
/// let client = Client::new(Options::default());
/// let card = MessageCard::new().with_text("Hello World");
/// client
///     .send("https://outlook.office.com/webhook/xxx", &card)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<H = ReqwestTransport> {
    transport: H,
    options: Options,
}

impl Client<ReqwestTransport> {
    /// Creates a client backed by the production reqwest transport.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let options = options.normalized();
        let transport = ReqwestTransport::new(options.timeout);
        Self { transport, options }
    }
}

impl Default for Client<ReqwestTransport> {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<H> Client<H> {
    /// Creates a client over a caller-supplied transport.
    ///
    /// The transport is responsible for honoring
    /// [`Options::timeout`]; [`ReqwestTransport::new`] does so, and
    /// test doubles usually do not care.
    #[must_use]
    pub fn with_transport(transport: H, options: Options) -> Self {
        Self {
            transport,
            options: options.normalized(),
        }
    }

    /// Returns the client's configuration.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }
}

impl<H: HttpClient> Client<H> {
    /// Posts a message card to the given webhook URL.
    ///
    /// Validates the URL and card first; on validation failure the
    /// transport is never invoked. The response body is discarded on
    /// success.
    ///
    /// # Errors
    ///
    /// Returns the first [`SendError`] encountered:
    /// [`Validation`](SendError::Validation) before any network
    /// activity, [`RequestConstruction`](SendError::RequestConstruction)
    /// if serialization fails, [`Transport`](SendError::Transport) if
    /// the exchange itself fails (including timeout), or one of the
    /// status-mapped variants for a non-success response --
    /// [`NotFound`](SendError::NotFound) for 404,
    /// [`UserAccessDenied`](SendError::UserAccessDenied) for 401/403,
    /// [`TooManyRequests`](SendError::TooManyRequests) for 429, and
    /// [`UnexpectedStatus`](SendError::UnexpectedStatus) for anything
    /// else outside 200/201/204.
    pub async fn send(&self, webhook_url: &str, card: &MessageCard) -> Result<(), SendError> {
        validate::input(card, webhook_url)?;

        let request = build_request(webhook_url, card)?;
        self.dispatch(request).await?;
        Ok(())
    }

    /// Posts a message card and decodes the response body into `T`.
    ///
    /// Same pipeline as [`send`](Self::send), then parses the buffered
    /// body as JSON.
    ///
    /// # Errors
    ///
    /// Everything [`send`](Self::send) returns, plus
    /// [`SendError::Decode`] when the body is not valid JSON for `T`;
    /// the error carries the raw body text along with the request's
    /// method and destination.
    pub async fn send_with_response<T: DeserializeOwned>(
        &self,
        webhook_url: &str,
        card: &MessageCard,
    ) -> Result<T, SendError> {
        validate::input(card, webhook_url)?;

        let request = build_request(webhook_url, card)?;
        let method = request.method.clone();
        let url = request.url.to_string();

        let response = self.dispatch(request).await?;

        serde_json::from_slice(&response.body).map_err(|source| SendError::Decode {
            method,
            url,
            body: response.body_text().unwrap_or("<binary>").to_owned(),
            source,
        })
    }

    /// Submits one request and classifies the outcome.
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, SendError> {
        let method = request.method.clone();
        let url = request.url.to_string();

        if self.options.verbose {
            tracing::debug!("outgoing request:\n{}", trace::dump_request(&request));
        }

        let response = self
            .transport
            .request(request)
            .await
            .map_err(|source| SendError::Transport {
                method,
                url,
                source,
            })?;

        if self.options.verbose {
            tracing::debug!("incoming response:\n{}", trace::dump_response(&response));
        }

        // Success set first, then the specially-named failures, then
        // the generic fallback. Exhaustive: no status is ambiguous.
        match response.status {
            http::StatusCode::OK | http::StatusCode::CREATED | http::StatusCode::NO_CONTENT => {
                Ok(response)
            }
            http::StatusCode::NOT_FOUND => Err(SendError::NotFound),
            http::StatusCode::UNAUTHORIZED | http::StatusCode::FORBIDDEN => {
                Err(SendError::UserAccessDenied)
            }
            http::StatusCode::TOO_MANY_REQUESTS => Err(SendError::TooManyRequests),
            status => Err(SendError::UnexpectedStatus(status)),
        }
    }
}

/// Serializes the card and assembles the POST request.
///
/// The URL was already prefix-checked, but parsing happens here too:
/// a prefix match does not guarantee the remainder of the string forms
/// a valid URL.
fn build_request(webhook_url: &str, card: &MessageCard) -> Result<HttpRequest, SendError> {
    let url = url::Url::parse(webhook_url)
        .map_err(|e| SendError::RequestConstruction(Box::new(e)))?;
    let body = serde_json::to_vec(card).map_err(|e| SendError::RequestConstruction(Box::new(e)))?;

    Ok(HttpRequest::post(url)
        .with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(CONTENT_TYPE_JSON),
        )
        .with_body(body))
}
