//! HTTP seam between the gateway and the network.
//!
//! Only one dispatch mode exists: the body is always read back. Requests go
//! out as `text/plain` and redirects are followed, which is what script-style
//! endpoints need to hand back their JSON after the 302 to the content host.

use crate::errors::{AppError, AppResult, GatewayError};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use std::time::Duration;

const MAX_REDIRECTS: usize = 10;

/// Status and body of one POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    /// One POST of `body` to `url`. Exactly one attempt.
    fn post(&self, url: &str, body: String) -> Result<HttpResponse, GatewayError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// `timeout_secs = None` disables the client timeout entirely.
    pub fn new(timeout_secs: Option<u64>) -> AppResult<Self> {
        let client = Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(timeout_secs.map(Duration::from_secs))
            .user_agent(concat!("rtiffin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Other(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, body: String) -> Result<HttpResponse, GatewayError> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            return Ok(HttpResponse {
                status,
                body: String::new(),
            });
        }

        let body = resp
            .text()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
