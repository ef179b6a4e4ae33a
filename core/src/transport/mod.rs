//! The seam between request building and network I/O.
//!
//! Implement [`Transport`] to plug in any HTTP stack. With the `reqwest`
//! feature, [`ReqwestTransport`] provides one backed by a cookie jar.

use std::sync::Arc;

use serde::Deserialize;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

#[cfg(feature = "reqwest")]
mod reqwest;

#[cfg(feature = "reqwest")]
pub use self::reqwest::ReqwestTransport;

/// Sends one `HttpRequest` and returns the daemon's response.
///
/// Non-2xx responses are returned as `Ok`. Only failures to complete the
/// exchange are errors.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

/// Where and how a transport reaches the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransportConfig {
    /// Scheme and authority that relative request URLs are resolved against.
    pub base_url: String,

    /// Daemons usually serve a self-signed certificate.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl TransportConfig {
    /// Config for a daemon reachable over HTTPS at `host` (`name[:port]`).
    pub fn for_host(host: &str) -> Self {
        Self {
            base_url: format!("https://{host}"),
            accept_invalid_certs: false,
        }
    }
}
