// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! reqwest-backed transport.

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};

use crate::command::{HttpMethod, RequestBody};
use crate::error::ProtocolError;
use crate::protocol::TransportResponse;

// ============================================================================
// HttpConfig - Connection parameters for the LIFX cloud
// ============================================================================

/// Configuration for the LIFX HTTP API.
///
/// The access token is sent as a bearer token on every request. It is never
/// printed by `Debug`.
///
/// # Examples
///
/// ```
/// use lifx_http::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("c0ffee");
///
/// // With all options
/// let config = HttpConfig::new("c0ffee")
///     .with_base_url("http://localhost:8080/v1")
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Clone)]
pub struct HttpConfig {
    token: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl HttpConfig {
    /// Default API endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.lifx.com/v1";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Default `User-Agent` header.
    pub const DEFAULT_USER_AGENT: &'static str =
        concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    /// Creates a configuration for the given access token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Sets a custom API endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the access token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the API endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the `User-Agent` header.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the base URL cannot be
    /// extended with path segments, `ProtocolError::InvalidToken` if the
    /// token cannot be sent as a header, or `ProtocolError::Http` if the
    /// HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpTransport, ProtocolError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| ProtocolError::InvalidAddress(format!("{}: {e}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| ProtocolError::InvalidToken)?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .default_headers(headers)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpTransport { base_url, client })
    }
}

impl fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

// ============================================================================
// HttpTransport - Single-attempt request execution
// ============================================================================

/// HTTP transport for the LIFX cloud API.
///
/// Holds the connection pool and the authorization header. Cloning is cheap
/// and shares the pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: Url,
    client: Client,
}

impl HttpTransport {
    /// Returns the API endpoint.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the URL for the given path segments.
    ///
    /// Each segment is percent-encoded on its own, so a selector such as
    /// `group:Living Room` stays one segment.
    fn build_url(&self, path: &[String]) -> Result<Url, ProtocolError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ProtocolError::InvalidAddress(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    /// Performs one request.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Http` if the request cannot be sent or its
    /// body cannot be read. A non-success status is not an error.
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &[String],
        body: Option<&RequestBody>,
    ) -> Result<TransportResponse, ProtocolError> {
        let url = self.build_url(path)?;

        tracing::debug!(method = %method, url = %url, "Sending HTTP request");

        let mut request = self.client.request(to_reqwest(method), url);
        if let Some(body) = body {
            request = match body {
                RequestBody::Form(form) => request
                    .header(CONTENT_TYPE, body.content_type())
                    .body(form.encode()),
                RequestBody::Json(value) => request.json(value),
            };
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;
        let status = response.status();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(status = status.as_u16(), "Received HTTP response");

        if status.is_success() {
            Ok(TransportResponse::Success(body))
        } else {
            Ok(TransportResponse::Failure {
                status: status.as_u16(),
                body,
            })
        }
    }
}

fn to_reqwest(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(path: &[&str]) -> Vec<String> {
        path.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn build_url_appends_segments() {
        let transport = HttpConfig::new("token").into_client().unwrap();
        let url = transport
            .build_url(&segments(&["lights", "all", "toggle"]))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.lifx.com/v1/lights/all/toggle");
    }

    #[test]
    fn build_url_keeps_selector_in_one_segment() {
        let transport = HttpConfig::new("token").into_client().unwrap();
        let url = transport
            .build_url(&segments(&["lights", "group:Living Room", "state"]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.lifx.com/v1/lights/group:Living%20Room/state"
        );

        let url = transport
            .build_url(&segments(&["lights", "Hall/Upstairs"]))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.lifx.com/v1/lights/Hall%2FUpstairs");
    }

    #[test]
    fn build_url_with_trailing_slash_base() {
        let transport = HttpConfig::new("token")
            .with_base_url("http://localhost:8080/")
            .into_client()
            .unwrap();
        let url = transport.build_url(&segments(&["scenes"])).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/scenes");
    }

    // =========================================================================
    // HttpConfig tests
    // =========================================================================

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("c0ffee");
        assert_eq!(config.token(), "c0ffee");
        assert_eq!(config.base_url(), "https://api.lifx.com/v1");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.user_agent().starts_with("lifx_http/"));
    }

    #[test]
    fn http_config_builder_chain() {
        let config = HttpConfig::new("c0ffee")
            .with_base_url("http://127.0.0.1:9000")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test/1.0");

        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent(), "test/1.0");
    }

    #[test]
    fn http_config_debug_redacts_token() {
        let debug = format!("{:?}", HttpConfig::new("secret-token"));
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn http_config_into_client() {
        let transport = HttpConfig::new("c0ffee")
            .with_base_url("http://127.0.0.1:9000/v1")
            .into_client()
            .unwrap();
        assert_eq!(transport.base_url().as_str(), "http://127.0.0.1:9000/v1");
    }

    #[test]
    fn http_config_invalid_base_url() {
        assert!(matches!(
            HttpConfig::new("c0ffee").with_base_url("not a url").into_client(),
            Err(ProtocolError::InvalidAddress(_))
        ));
        assert!(matches!(
            HttpConfig::new("c0ffee")
                .with_base_url("mailto:someone@example.com")
                .into_client(),
            Err(ProtocolError::InvalidAddress(_))
        ));
    }

    #[test]
    fn http_config_invalid_token() {
        assert!(matches!(
            HttpConfig::new("bad\ntoken").into_client(),
            Err(ProtocolError::InvalidToken)
        ));
    }
}
