//! The I/O seam between the executor and the network.
//!
//! # Design
//! One async operation, injected at construction. A transport reports
//! whether an exchange completed; deciding whether its status is acceptable
//! is left to the executor. Blanket impls for `Arc<T>` and `&T` let callers
//! keep their own handle to a shared transport.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Capability that performs the actual network exchange for an `HttpRequest`.
///
/// Implement this with whatever HTTP stack the host provides (the bundled
/// `UreqTransport`, hyper, reqwest, a platform API) or with a fake in tests.
///
/// A completed exchange is `Ok` whatever its status code: a 404 or 503 is a
/// response, not a transport failure. `Err` is reserved for exchanges that
/// did not complete at all.
///
/// ```ignore
/// use async_trait::async_trait;
/// use network_core::{HttpRequest, HttpResponse, Transport, TransportError};
///
/// struct MyTransport;
///
/// #[async_trait]
/// impl Transport for MyTransport {
///     async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
///         // Issue `request` with your HTTP library of choice
///         Ok(HttpResponse::new(200, b"response".to_vec()))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the server's answer.
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).fetch(request).await
    }
}

#[async_trait]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).fetch(request).await
    }
}
