//! HTTP gateway trait abstraction.
//!
//! The API access layer issues requests through this trait instead of a
//! concrete client, so tests can substitute a recording mock and the view
//! layer never sees reqwest types.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use std::time::Duration;

use crate::error::ApiError;

/// Basic-auth credentials for the daemons' admin endpoints.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub user: String,
    pub password: String,
}

/// A fully resolved outbound request.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
    pub auth: Option<BasicAuth>,
}

impl GatewayRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            auth: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_auth(mut self, auth: Option<BasicAuth>) -> Self {
        self.auth = auth;
        self
    }
}

/// An HTTP response reduced to what the console needs.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: Bytes,
}

impl GatewayResponse {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as UTF-8 text, lossy on invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON, mapping failures into the API taxonomy.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Trait for outbound HTTP, the seam between console and network.
#[async_trait]
pub trait HttpGateway: Send + Sync {
    /// Send one request and collect the full response.
    ///
    /// Transport-level failures map to [`ApiError::Transport`]; a response
    /// of any status is returned as `Ok` so the caller decides what non-2xx
    /// means for it.
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, ApiError>;
}

/// Production gateway backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    client: reqwest::Client,
}

impl ReqwestGateway {
    /// Build with the console's default timeout.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for ReqwestGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpGateway for ReqwestGateway {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, ApiError> {
        let mut builder = self.client.request(request.method, &request.url);
        if let Some(auth) = &request.auth {
            builder = builder.basic_auth(&auth.user, Some(&auth.password));
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await.map_err(ApiError::from_reqwest)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(ApiError::from_reqwest)?;
        Ok(GatewayResponse::new(status, body))
    }
}

/// Recording mock gateway for unit tests.
#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays queued responses and records every request it saw.
    pub struct MockGateway {
        responses: Mutex<VecDeque<Result<GatewayResponse, ApiError>>>,
        pub requests: Mutex<Vec<GatewayRequest>>,
    }

    impl MockGateway {
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn push_response(&self, response: Result<GatewayResponse, ApiError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        pub fn push_json(&self, status: u16, body: &str) {
            self.push_response(Ok(GatewayResponse::new(
                status,
                Bytes::from(body.to_string()),
            )));
        }

        pub fn seen_urls(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.url.clone())
                .collect()
        }
    }

    #[async_trait]
    impl HttpGateway for MockGateway {
        async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, ApiError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("mock exhausted".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success_bounds() {
        assert!(GatewayResponse::new(200, Bytes::new()).is_success());
        assert!(GatewayResponse::new(299, Bytes::new()).is_success());
        assert!(!GatewayResponse::new(300, Bytes::new()).is_success());
        assert!(!GatewayResponse::new(404, Bytes::new()).is_success());
    }

    #[test]
    fn test_response_json_decode_error_maps_to_taxonomy() {
        let response = GatewayResponse::new(200, Bytes::from("{not json"));
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[test]
    fn test_request_builder() {
        let req = GatewayRequest::new(Method::PUT, "http://x/api/config")
            .with_body("bind_port = 7000")
            .with_auth(Some(BasicAuth {
                user: "admin".into(),
                password: "secret".into(),
            }));
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.body.as_deref(), Some("bind_port = 7000"));
        assert_eq!(req.auth.unwrap().user, "admin");
    }
}
