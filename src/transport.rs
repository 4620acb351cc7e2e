//! Production HTTP transport built on reqwest.

use std::time::Duration;

use crate::error::HttpError;
use crate::http::{HttpClient, HttpRequest, HttpResponse};

/// Production [`HttpClient`] using `reqwest`.
///
/// A thin wrapper around `reqwest::Client` that applies a per-request
/// timeout and buffers response bodies. Cloning is cheap and shares
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport that bounds every request by `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            inner: reqwest::Client::new(),
            timeout,
        }
    }

    /// Creates a transport from an existing reqwest client.
    ///
    /// Useful when custom TLS or proxy configuration is needed.
    #[must_use]
    pub const fn from_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            inner: client,
            timeout,
        }
    }
}

impl HttpClient for ReqwestTransport {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self
            .inner
            .request(req.method, req.url.as_str())
            .timeout(self.timeout);

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
