//! `Transport` backed by [`reqwest`] with an in-memory cookie jar.
//!
//! The jar plays the part of the browser cookie store: it keeps the session
//! cookie set by `/user/login` and replays it on later requests whose
//! credential policy is `Include`.

use std::sync::Arc;

use ::reqwest::cookie::{CookieStore, Jar};
use ::reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE, SET_COOKIE};
use ::reqwest::{Client, Method, Url};

use super::{Transport, TransportConfig};
use crate::error::TransportError;
use crate::http::{Credentials, HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    jar: Arc<Jar>,
}

impl ReqwestTransport {
    /// Transport for a daemon served over HTTPS at `host`.
    pub fn new(host: &str) -> Result<Self, TransportError> {
        Self::with_config(TransportConfig::for_host(host))
    }

    pub fn with_config(config: TransportConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TransportError::InvalidRequest(format!("base url {}: {e}", config.base_url)))?;
        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            jar: Arc::new(Jar::default()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a server-relative request URL against the base URL. The URL
    /// must start with `/`.
    fn resolve(&self, url: &str) -> Result<Url, TransportError> {
        if !url.starts_with('/') {
            return Err(TransportError::InvalidRequest(format!("url {url}: must start with '/'")));
        }
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{url}"))
            .map_err(|e| TransportError::InvalidRequest(format!("url {url}: {e}")))
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.resolve(&request.url)?;
        let include_cookies = request.credentials == Credentials::Include;

        let mut headers = prepare_headers(&request.headers)?;
        if include_cookies {
            if let Some(cookie) = self.jar.cookies(&url) {
                headers.insert(COOKIE, cookie);
            }
        }

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };
        tracing::debug!(method = request.method.as_str(), %url, "sending request");

        let mut builder = self.client.request(method, url.clone()).headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            let err = classify(e);
            tracing::warn!(%url, error = %err, "request failed");
            err
        })?;

        if include_cookies {
            let mut set_cookies = response.headers().get_all(SET_COOKIE).iter();
            self.jar.set_cookies(&mut set_cookies, &url);
        }

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}

fn prepare_headers(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| TransportError::InvalidRequest(format!("header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| TransportError::InvalidRequest(format!("header value {value:?}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

fn collect_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            (name.as_str().to_string(), value)
        })
        .collect()
}

fn classify(error: ::reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::InvalidRequest(error.to_string())
    } else if error.is_connect() {
        TransportError::Unreachable(error.to_string())
    } else {
        TransportError::Request(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> ReqwestTransport {
        ReqwestTransport::with_config(TransportConfig {
            base_url: base_url.to_string(),
            accept_invalid_certs: false,
        })
        .unwrap()
    }

    #[test]
    fn new_uses_https() {
        let transport = ReqwestTransport::new("daemon.example.com:4303").unwrap();
        assert_eq!(transport.base_url().as_str(), "https://daemon.example.com:4303/");
    }

    #[test]
    fn resolve_joins_relative_url() {
        let url = transport("http://127.0.0.1:3000").resolve("/logs?stream=true").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/logs?stream=true");
    }

    #[test]
    fn resolve_keeps_base_path() {
        let url = transport("http://127.0.0.1:3000/daemon/").resolve("/status").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/daemon/status");
    }

    #[test]
    fn resolve_rejects_url_without_leading_slash() {
        let err = transport("https://daemon.example.com").resolve("status").unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }

    #[test]
    fn non_utf8_response_headers_are_kept() {
        let mut map = HeaderMap::new();
        map.insert("x-note", HeaderValue::from_bytes(b"caf\xe9").unwrap());
        map.insert("accept", HeaderValue::from_static("application/json"));

        let headers = collect_headers(&map);
        assert_eq!(headers.len(), 2);
        assert!(headers.contains(&("x-note".to_string(), "caf\u{fffd}".to_string())));
        assert!(headers.contains(&("accept".to_string(), "application/json".to_string())));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ReqwestTransport::with_config(TransportConfig {
            base_url: "not a url".to_string(),
            accept_invalid_certs: false,
        })
        .unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }

    #[test]
    fn bad_header_value_is_rejected() {
        let err = prepare_headers(&[("Accept".to_string(), "line\nbreak".to_string())]).unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }

    #[test]
    fn headers_are_copied() {
        let map = prepare_headers(&[
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ])
        .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("accept").unwrap(), "application/json");
    }
}
