//! Bundled `Transport` built on a blocking ureq agent.
//!
//! # Design
//! The agent never turns a status code into an error, so every completed
//! exchange comes back as an `HttpResponse` for the executor to classify.
//! Only ureq errors that mean the exchange did not complete become a
//! `TransportError`. Response bodies are read without a size cap.

use std::time::Duration;

use async_trait::async_trait;
use ureq::http;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// `Transport` backed by a ureq agent.
///
/// ureq is blocking, so each `fetch` runs the exchange inline on the calling
/// task. Fine for a handful of requests; for high fan-out supply an async
/// transport instead. Do not use it on a current-thread runtime when
/// requests overlap: each call holds the only worker until it finishes, so
/// concurrent `perform` calls run one after another.
///
/// The agent is built with `http_status_as_error(false)` so 4xx/5xx responses
/// reach the executor as data and are classified there.
///
/// ```ignore
/// use network_core::{HttpRequest, RequestExecutor, UreqTransport};
///
/// let executor = RequestExecutor::new(UreqTransport::new());
/// let body = executor.perform(&HttpRequest::get(url)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a transport with a 30 second global timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a preconfigured agent. It should have `http_status_as_error(false)`,
    /// otherwise non-2xx answers surface as transport failures.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn to_http_method(method: HttpMethod) -> http::Method {
    match method {
        HttpMethod::Get => http::Method::GET,
        HttpMethod::Post => http::Method::POST,
        HttpMethod::Put => http::Method::PUT,
        HttpMethod::Delete => http::Method::DELETE,
    }
}

fn map_error(e: ureq::Error) -> TransportError {
    match e {
        ureq::Error::Timeout(_) => TransportError::Timeout,
        ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
            TransportError::Connect(e.to_string())
        }
        ureq::Error::Io(io) => match io.kind() {
            std::io::ErrorKind::ConnectionRefused
            | std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::NotConnected => TransportError::Connect(io.to_string()),
            std::io::ErrorKind::TimedOut => TransportError::Timeout,
            _ => TransportError::Other(io.to_string()),
        },
        other => TransportError::Other(other.to_string()),
    }
}

/// Copy response headers, keeping values that are not valid UTF-8.
fn collect_headers(headers: &http::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

#[async_trait]
impl Transport for UreqTransport {
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = http::Request::builder()
            .method(to_http_method(request.method))
            .uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let result = match &request.body {
            Some(body) => {
                let req = builder
                    .body(body.as_slice())
                    .map_err(|e| TransportError::Other(e.to_string()))?;
                self.agent.run(req)
            }
            None => {
                let req = builder
                    .body(())
                    .map_err(|e| TransportError::Other(e.to_string()))?;
                self.agent.run(req)
            }
        };
        let mut response = result.map_err(map_error)?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(map_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
