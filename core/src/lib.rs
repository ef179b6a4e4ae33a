//! Async client for the Inertia daemon web API.
//!
//! # Overview
//! Wraps the daemon's fixed set of REST calls (login, logout, session
//! validation, container logs, status) behind `InertiaClient`. Requests are
//! assembled as plain data and sent through a pluggable `Transport`.
//!
//! # Design
//! - `request` builds descriptors and never touches the network.
//! - `Transport` is the only I/O seam; failures pass through unchanged and
//!   HTTP status codes are left to the caller.
//! - Every request asks the transport to include session cookies.
//! - DTOs are defined independently from the mock daemon crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod query;
pub mod request;
pub mod transport;
pub mod types;

pub use client::InertiaClient;
pub use error::{ApiError, TransportError};
pub use http::{Credentials, HttpMethod, HttpRequest, HttpResponse, RequestParams};
pub use query::{encode_query, QueryParams};
pub use transport::{Transport, TransportConfig};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use types::DaemonStatus;
