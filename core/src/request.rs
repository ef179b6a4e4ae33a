//! Request descriptors for each daemon web API call.
//!
//! Every function here is pure: it assembles an `HttpRequest` and returns it.
//! `InertiaClient` pairs each one with a transport call.

use serde_json::json;

use crate::http::{Credentials, HttpMethod, HttpRequest, RequestParams};
use crate::query::{encode_query, QueryParams};

pub const LOGIN: &str = "/user/login";
pub const LOGOUT: &str = "/user/logout";
pub const VALIDATE: &str = "/user/validate";
pub const LOGS: &str = "/logs";
pub const STATUS: &str = "/status";

/// Container whose logs are fetched when the caller names none.
pub const DEFAULT_CONTAINER: &str = "/inertia-daemon";

const ACCEPT: &str = "Accept";
const CONTENT_TYPE: &str = "Content-Type";
const JSON: &str = "application/json";
const FORM: &str = "application/x-www-form-urlencoded";

/// GET `endpoint`, with `query` encoded onto the URL when present.
///
/// GET requests never carry a body; one supplied in `params` is dropped.
pub fn get(endpoint: &str, params: RequestParams, query: Option<&QueryParams>) -> HttpRequest {
    if params.body.is_some() {
        tracing::debug!(endpoint, "body is not sent with GET requests");
    }
    HttpRequest {
        method: HttpMethod::Get,
        url: format!("{endpoint}{}", encode_query(query)),
        headers: params.headers,
        body: None,
        credentials: Credentials::Include,
    }
}

/// POST `endpoint` with the given headers and body.
///
/// `query` is accepted but never applied: the URL is always `endpoint`
/// unchanged. Only `get` encodes query parameters.
pub fn post(endpoint: &str, params: RequestParams, query: Option<&QueryParams>) -> HttpRequest {
    if let Some(query) = query.filter(|query| !query.is_empty()) {
        tracing::debug!(endpoint, ?query, "query parameters are not applied to POST requests");
    }
    HttpRequest {
        method: HttpMethod::Post,
        url: endpoint.to_string(),
        headers: params.headers,
        body: params.body,
        credentials: Credentials::Include,
    }
}

pub fn logout() -> HttpRequest {
    post(LOGOUT, RequestParams::new().header(ACCEPT, JSON), None)
}

/// The body is JSON even though the content type says form-urlencoded; the
/// daemon decodes the body as JSON regardless of the header.
pub fn login(username: &str, password: &str) -> HttpRequest {
    let body = json!({
        "username": username,
        "password": password,
    });
    let params = RequestParams::new()
        .header(ACCEPT, JSON)
        .header(CONTENT_TYPE, FORM)
        .body(body.to_string());
    post(LOGIN, params, None)
}

pub fn validate() -> HttpRequest {
    get(VALIDATE, RequestParams::new(), None)
}

/// Query parameters describing a streamed log request for `container`.
pub fn log_query(container: &str) -> QueryParams {
    QueryParams::from([
        ("stream".to_string(), "true".to_string()),
        ("container".to_string(), container.to_string()),
    ])
}

pub fn container_logs(container: Option<&str>) -> HttpRequest {
    let query = log_query(container.unwrap_or(DEFAULT_CONTAINER));
    let params = RequestParams::new().header(CONTENT_TYPE, JSON);
    post(LOGS, params, Some(&query))
}

pub fn remote_status() -> HttpRequest {
    let params = RequestParams::new()
        .header(CONTENT_TYPE, JSON)
        .header(ACCEPT, JSON);
    get(STATUS, params, None)
}
