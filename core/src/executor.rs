//! Single-attempt request execution with status classification.
//!
//! # Design
//! `RequestExecutor` holds only its injected transport and carries no mutable
//! state between calls, so `perform` takes `&self` and concurrent calls on
//! one executor never observe each other. Each call issues exactly one
//! `fetch` and ends in one of three outcomes: the body bytes,
//! `RequestError::Connectivity`, or `RequestError::InvalidResponse`.

use log::{debug, warn};

use crate::error::RequestError;
use crate::http::HttpRequest;
use crate::transport::Transport;

/// Performs HTTP requests through an injected `Transport`.
#[derive(Debug, Clone)]
pub struct RequestExecutor<T> {
    transport: T,
}

impl<T: Transport> RequestExecutor<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` once and return the response body if the status code
    /// is in 200..=299.
    ///
    /// No retry, no caching. Cancellation is whatever the transport does;
    /// a cancelled exchange comes back as `Connectivity`.
    pub async fn perform(&self, request: &HttpRequest) -> Result<Vec<u8>, RequestError> {
        debug!("{} {}", request.method, request.url);

        let response = match self.transport.fetch(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} {} failed: {e}", request.method, request.url);
                return Err(RequestError::Connectivity);
            }
        };

        if !response.is_success() {
            debug!(
                "{} {} rejected: status {}",
                request.method, request.url, response.status
            );
            return Err(RequestError::InvalidResponse);
        }

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            response.status,
            response.body.len()
        );
        Ok(response.body)
    }
}
