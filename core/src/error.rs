//! Error types for the daemon API client.
//!
//! # Design
//! `TransportError` is the only failure the request layer produces; clients
//! return it exactly as the transport reported it. HTTP status codes are not
//! errors there. `ApiError` exists for the optional `parse_*` helpers that
//! interpret a response once the caller has one.

use thiserror::Error;

/// Failure to complete a request/response exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be turned into a valid HTTP request (bad URL,
    /// header name or value).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The daemon could not be reached (DNS, connect, TLS handshake).
    #[error("daemon unreachable: {0}")]
    Unreachable(String),

    /// The request was sent but the exchange failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Errors returned by `InertiaClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The daemon returned 401 or 403; the session is missing or expired.
    #[error("not authorized (HTTP {status})")]
    Unauthorized { status: u16 },

    /// The daemon returned any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}
