//! Async client for the Inertia daemon web API.
//!
//! # Design
//! `InertiaClient` owns a `Transport` and nothing else. Each call builds an
//! `HttpRequest` with the matching function in [`crate::request`] and sends
//! it. A transport failure is returned exactly as the transport produced it;
//! any status code, including 4xx/5xx, comes back as an `HttpResponse` for
//! the caller to inspect. The `parse_*` methods are an optional second step
//! that interpret a response.

use crate::error::{ApiError, TransportError};
use crate::http::{HttpResponse, RequestParams};
use crate::query::QueryParams;
use crate::request;
use crate::transport::Transport;
use crate::types::DaemonStatus;

#[derive(Debug, Clone)]
pub struct InertiaClient<T> {
    transport: T,
}

impl<T> InertiaClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Check the response of `login`, `logout` or `validate`.
    pub fn parse_session(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_remote_status(&self, response: HttpResponse) -> Result<DaemonStatus, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Split a log response into lines.
    pub fn parse_container_logs(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        check_status(&response)?;
        Ok(response.body.lines().map(str::to_string).collect())
    }
}

impl<T: Transport> InertiaClient<T> {
    pub async fn logout(&self) -> Result<HttpResponse, TransportError> {
        self.transport.send(request::logout()).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<HttpResponse, TransportError> {
        self.transport.send(request::login(username, password)).await
    }

    pub async fn validate(&self) -> Result<HttpResponse, TransportError> {
        self.transport.send(request::validate()).await
    }

    /// Fetch logs for `container`, or for the daemon itself when `None`.
    pub async fn container_logs(&self, container: Option<&str>) -> Result<HttpResponse, TransportError> {
        self.transport.send(request::container_logs(container)).await
    }

    pub async fn remote_status(&self) -> Result<HttpResponse, TransportError> {
        self.transport.send(request::remote_status()).await
    }

    pub async fn get(
        &self,
        endpoint: &str,
        params: RequestParams,
        query: Option<&QueryParams>,
    ) -> Result<HttpResponse, TransportError> {
        self.transport.send(request::get(endpoint, params, query)).await
    }

    /// POST to `endpoint`. `query` is accepted and ignored, see [`request::post`].
    pub async fn post(
        &self,
        endpoint: &str,
        params: RequestParams,
        query: Option<&QueryParams>,
    ) -> Result<HttpResponse, TransportError> {
        self.transport.send(request::post(endpoint, params, query)).await
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if matches!(response.status, 401 | 403) {
        return Err(ApiError::Unauthorized { status: response.status });
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
