//! HTTP request and response types exchanged with a `Transport`.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! executor never builds sockets or parses wire bytes; it hands an
//! `HttpRequest` to the injected transport and inspects the `HttpResponse`
//! that comes back.
//!
//! All fields use owned types (`Url`, `String`, `Vec`) so values can be
//! cloned into recording transports and moved across tasks freely.

use std::fmt;
use std::ops::RangeInclusive;

use url::Url;

/// Status codes accepted as a successful exchange. Closed on both ends.
pub const SUCCESS_STATUS: RangeInclusive<u16> = 200..=299;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case method token as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Immutable once handed to `RequestExecutor::perform`; the executor only
/// borrows it for the duration of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Parse `url` and build a request with no headers or body.
    pub fn from_str_url(method: HttpMethod, url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(method, Url::parse(url)?))
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport`, consumed once by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        SUCCESS_STATUS.contains(&self.status)
    }
}
