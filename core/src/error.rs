//! Error types for the request executor and its transports.
//!
//! # Design
//! `RequestError` is the whole public failure surface of `perform`: either
//! the exchange never completed, or it completed with a status outside
//! 200..=299. The transport's own detail lives in `TransportError`, which the
//! executor logs and then collapses into `Connectivity`.

use thiserror::Error;

/// Outcome of a failed `RequestExecutor::perform` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The transport could not complete the exchange (DNS, refused or reset
    /// connection, timeout, cancellation).
    #[error("network connectivity failure")]
    Connectivity,

    /// The exchange completed but the status code was not in 200..=299.
    /// The response payload is discarded.
    #[error("invalid response status")]
    InvalidResponse,
}

/// Failure reported by a `Transport` when no response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("request cancelled")]
    Cancelled,

    #[error("transport error: {0}")]
    Other(String),
}
