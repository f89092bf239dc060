//! Recording transport for tests of code built on `RequestExecutor`.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// A `Transport` that answers every `fetch` with the same scripted result
/// and remembers each request it was handed, in call order.
#[derive(Debug)]
pub struct TransportSpy {
    result: Result<HttpResponse, TransportError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl TransportSpy {
    pub fn new(result: Result<HttpResponse, TransportError>) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Spy whose exchanges complete with `status` and `body`.
    pub fn responding(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(Ok(HttpResponse::new(status, body)))
    }

    /// Spy whose exchanges never complete.
    pub fn failing(error: TransportError) -> Self {
        Self::new(Err(error))
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Transport for TransportSpy {
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        self.result.clone()
    }
}
