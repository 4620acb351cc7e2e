//! HTTP request/response value types and the transport trait.

use crate::error::HttpError;

/// An HTTP request ready for submission.
///
/// A plain value built by the client and handed to whichever
/// [`HttpClient`] implementation was injected. Uses `http` crate types
/// for method and headers so implementations stay interchangeable.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: http::Method,
    pub url: url::Url,
    pub headers: http::HeaderMap,
    /// Optional request body, already serialized.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a POST request to the given URL with no headers or body.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self {
            method: http::Method::POST,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Appends a header.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// An HTTP response with its body fully buffered.
///
/// Buffering keeps resource ownership simple (the body is released
/// when the value drops, on every exit path) and lets the same bytes
/// feed both response decoding and error diagnostics.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: http::StatusCode,
    pub headers: http::HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response value.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// The transport capability: perform one HTTP exchange.
///
/// The client depends only on this trait, never on a concrete HTTP
/// library, so test doubles can stand in for the network and the
/// underlying library can be swapped without touching delivery logic.
/// Implementations must be safe for concurrent use.
pub trait HttpClient: Send + Sync {
    /// Submits the request and returns the buffered response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the exchange itself fails: the
    /// connection could not be established ([`HttpError::Connection`]),
    /// the configured timeout expired ([`HttpError::Timeout`]), or the
    /// URL was rejected by the implementation
    /// ([`HttpError::InvalidUrl`]). A completed exchange with a
    /// non-success status is NOT an error at this layer.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
