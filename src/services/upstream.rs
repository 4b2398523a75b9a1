//! Generic upstream HTTP call wrapper.
//!
//! Every outbound call to a third-party API goes through [`UpstreamClient`]:
//! one attempt, the required auth header attached, and the response body
//! handed back as uninterpreted JSON. Failures (network errors, non-2xx
//! statuses, bodies that fail a required shape) become [`UpstreamError`]
//! values carrying the upstream's own error body when one was readable.
//!
//! No retries, no circuit breaking, and no timeout beyond what the
//! transport itself applies.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;
use reqwest::{header, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Authorization scheme attached to an upstream call
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    /// `Authorization: Basic <base64(id:secret)>`
    Basic { id: &'a str, secret: &'a str },
    /// `Authorization: Bearer <token>`
    Bearer(&'a str),
}

impl Auth<'_> {
    fn header_value(&self) -> String {
        match self {
            Auth::Basic { id, secret } => {
                format!("Basic {}", BASE64.encode(format!("{}:{}", id, secret)))
            }
            Auth::Bearer(token) => format!("Bearer {}", token),
        }
    }
}

/// A failed upstream call
#[derive(Debug)]
pub struct UpstreamError {
    /// Local description of the failure
    pub message: String,
    /// The upstream's error body, when one was readable
    pub body: Option<Value>,
}

impl UpstreamError {
    fn transport(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            body: None,
        }
    }

    fn status(status: StatusCode, body: Option<Value>) -> Self {
        Self {
            message: format!("upstream returned {}", status),
            body,
        }
    }

    /// A 2xx response whose body did not have the required shape
    pub fn malformed(message: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            message: message.into(),
            body,
        }
    }

    /// The value surfaced to the caller under `details`: the upstream error
    /// body when available, else the local failure message.
    pub fn into_details(self) -> Value {
        self.body.unwrap_or(Value::String(self.message))
    }
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UpstreamError {}

/// HTTP client for upstream API calls
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone, Default)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Create a new client with transport defaults
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// GET a JSON resource
    pub async fn get_json(&self, url: &str, auth: Auth<'_>) -> Result<Value, UpstreamError> {
        debug!(url = %url, "Upstream GET");
        let request = self
            .http
            .get(url)
            .header(header::AUTHORIZATION, auth.header_value());
        self.execute(request).await
    }

    /// POST a url-encoded form; `auth` is optional because some token
    /// endpoints take credentials in the form body instead of a header
    pub async fn post_form(
        &self,
        url: &str,
        auth: Option<Auth<'_>>,
        form: &[(&str, &str)],
    ) -> Result<Value, UpstreamError> {
        debug!(url = %url, "Upstream POST (form)");
        let mut request = self.http.post(url).form(form);
        if let Some(auth) = auth {
            request = request.header(header::AUTHORIZATION, auth.header_value());
        }
        self.execute(request).await
    }

    /// POST a JSON body
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        auth: Auth<'_>,
        body: &T,
    ) -> Result<Value, UpstreamError> {
        debug!(url = %url, "Upstream POST (json)");
        let request = self
            .http
            .post(url)
            .header(header::AUTHORIZATION, auth.header_value())
            .json(body);
        self.execute(request).await
    }

    /// PUT raw bytes with an explicit content type; the response body is
    /// discarded on success
    pub async fn put_bytes(
        &self,
        url: &str,
        auth: Auth<'_>,
        content_type: &str,
        data: Bytes,
    ) -> Result<(), UpstreamError> {
        debug!(url = %url, size = data.len(), "Upstream PUT (binary)");
        let request = self
            .http
            .put(url)
            .header(header::AUTHORIZATION, auth.header_value())
            .header(header::CONTENT_TYPE, content_type)
            .body(data);
        self.execute(request).await.map(|_| ())
    }

    /// Single best-effort send; non-2xx becomes an error carrying whatever
    /// body the upstream produced
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, UpstreamError> {
        let response = request.send().await.map_err(UpstreamError::transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(UpstreamError::transport)?;
        let body = parse_body(&bytes);

        if !status.is_success() {
            return Err(UpstreamError::status(status, body));
        }

        Ok(body.unwrap_or(Value::Null))
    }
}

/// Best-effort body parse: JSON when it is JSON, else the raw text
fn parse_body(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }
    serde_json::from_slice(bytes)
        .ok()
        .or_else(|| Some(Value::String(String::from_utf8_lossy(bytes).into_owned())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_auth_header() {
        let auth = Auth::Basic {
            id: "client",
            secret: "secret",
        };
        // base64("client:secret")
        assert_eq!(auth.header_value(), "Basic Y2xpZW50OnNlY3JldA==");
    }

    #[test]
    fn test_bearer_auth_header() {
        assert_eq!(Auth::Bearer("tok-123").header_value(), "Bearer tok-123");
    }

    #[test]
    fn test_parse_body_json() {
        assert_eq!(
            parse_body(br#"{"ok":true}"#),
            Some(json!({"ok": true}))
        );
    }

    #[test]
    fn test_parse_body_text_fallback() {
        assert_eq!(
            parse_body(b"gateway timeout"),
            Some(Value::String("gateway timeout".to_string()))
        );
    }

    #[test]
    fn test_parse_body_empty() {
        assert_eq!(parse_body(b""), None);
    }

    #[test]
    fn test_details_prefers_upstream_body() {
        let err = UpstreamError::status(StatusCode::NOT_FOUND, Some(json!({"name": "Not Found"})));
        assert_eq!(err.into_details(), json!({"name": "Not Found"}));

        let err = UpstreamError {
            message: "connection refused".to_string(),
            body: None,
        };
        assert_eq!(err.into_details(), Value::String("connection refused".to_string()));
    }
}
