//! HTTP request and response descriptors.
//!
//! # Design
//! Requests and responses are plain data. `InertiaClient` builds an
//! `HttpRequest` and hands it to a `Transport`; the transport owns all
//! network I/O and returns an `HttpResponse`. Status codes are carried as
//! data and never turned into errors at this layer.
//!
//! `url` is server-relative (`/user/login?...`). The transport resolves it
//! against its configured base URL.

/// HTTP method for a request. The daemon web API only uses GET and POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Whether stored session cookies accompany a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    /// Never attach or store cookies.
    Omit,
    /// Attach stored cookies and keep any the server sets, including on
    /// cross-origin requests.
    Include,
}

/// Headers and body supplied by the caller of `get`/`post`.
///
/// Header names compare case-insensitively: setting a header replaces any
/// existing entry with the same name in any case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.set_header(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }
}

/// A fully assembled request, used once and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Credentials,
}

impl HttpRequest {
    /// Look up a header value by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
