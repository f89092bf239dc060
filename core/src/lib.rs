//! Single-attempt HTTP request execution over an injected transport.
//!
//! # Overview
//! `RequestExecutor::perform` hands an `HttpRequest` to a `Transport`, waits
//! for it once, and returns the body bytes when the status code is in
//! 200..=299. Anything else is classified as `RequestError::Connectivity`
//! (the exchange never completed) or `RequestError::InvalidResponse` (it
//! completed with a rejected status).
//!
//! # Design
//! - `Transport` is the only I/O seam. Production code injects
//!   `UreqTransport` (feature `ureq-transport`) or its own implementation;
//!   tests inject `testing::TransportSpy`.
//! - `RequestExecutor` is stateless beyond its transport, so `perform`
//!   takes `&self` and is safe to call concurrently.
//! - No retry, timeout policy, caching, or body parsing lives here.

pub mod error;
pub mod executor;
pub mod http;
pub mod testing;
pub mod transport;
#[cfg(feature = "ureq-transport")]
mod ureq_transport;

pub use error::{RequestError, TransportError};
pub use executor::RequestExecutor;
pub use http::{HttpMethod, HttpRequest, HttpResponse, SUCCESS_STATUS};
pub use transport::Transport;
#[cfg(feature = "ureq-transport")]
pub use ureq_transport::UreqTransport;
pub use url::Url;
