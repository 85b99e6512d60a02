//! API access layer.
//!
//! All backend communication goes through [`ApiClient`], which joins the
//! reserved `/api` prefix onto a configured backend origin and issues
//! requests through the [`HttpGateway`] seam. In production the origin is
//! simply the daemon's admin address; in development the origin can point at
//! the forwarding layer in [`devproxy`] instead, which is compiled only
//! under the `dev-proxy` feature so no development branching exists in a
//! release build.

pub mod gateway;

#[cfg(feature = "dev-proxy")]
pub mod devproxy;

use reqwest::Method;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{ClientStatus, ProxyInfo, ProxyList, ProxyType, ServerInfo, TrafficInfo};

pub use gateway::{BasicAuth, GatewayRequest, GatewayResponse, HttpGateway, ReqwestGateway};

/// The reserved path segment distinguishing backend calls from everything
/// else.
pub const API_PREFIX: &str = "/api";

/// Typed client for the daemons' status/config APIs.
#[derive(Clone)]
pub struct ApiClient {
    gateway: Arc<dyn HttpGateway>,
    origin: String,
    auth: Option<BasicAuth>,
}

impl ApiClient {
    /// Build against a backend origin such as `http://127.0.0.1:7400`.
    ///
    /// A trailing slash on the origin is tolerated and ignored.
    pub fn new(origin: impl Into<String>, auth: Option<BasicAuth>) -> Self {
        Self::with_gateway(Arc::new(ReqwestGateway::new()), origin, auth)
    }

    /// Build with an injected gateway (tests, instrumentation).
    pub fn with_gateway(
        gateway: Arc<dyn HttpGateway>,
        origin: impl Into<String>,
        auth: Option<BasicAuth>,
    ) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self {
            gateway,
            origin,
            auth,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Issue a request for a path under the reserved `/api` prefix.
    ///
    /// `path` is the logical path, e.g. `/status`; the prefix is added here
    /// and nowhere else, so it can never be applied twice.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<GatewayResponse, ApiError> {
        let url = format!("{}{}{}", self.origin, API_PREFIX, path);
        self.send(method, url, body).await
    }

    /// Issue a request outside the reserved prefix (only `/healthz`).
    async fn request_raw(
        &self,
        method: Method,
        path: &str,
    ) -> Result<GatewayResponse, ApiError> {
        let url = format!("{}{}", self.origin, path);
        self.send(method, url, None).await
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<GatewayResponse, ApiError> {
        tracing::debug!(%url, method = %method, "api request");
        let mut request = GatewayRequest::new(method, url).with_auth(self.auth.clone());
        if let Some(body) = body {
            request = request.with_body(body);
        }
        let response = self.gateway.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: response.status,
                message: response.text(),
            })
        }
    }

    // --- client-daemon endpoints -------------------------------------------

    /// `GET /api/status`: proxy status grouped by type.
    pub async fn client_status(&self) -> Result<ClientStatus, ApiError> {
        self.request(Method::GET, "/status", None).await?.json()
    }

    /// `GET /api/config`: the daemon's config file content.
    pub async fn client_config(&self) -> Result<String, ApiError> {
        Ok(self.request(Method::GET, "/config", None).await?.text())
    }

    /// `GET /api/reload`: ask the daemon to re-read its config.
    pub async fn reload_client(&self) -> Result<(), ApiError> {
        self.request(Method::GET, "/reload", None).await?;
        Ok(())
    }

    // --- server-daemon endpoints -------------------------------------------

    /// `GET /api/serverinfo`: summary counters.
    pub async fn server_info(&self) -> Result<ServerInfo, ApiError> {
        self.request(Method::GET, "/serverinfo", None).await?.json()
    }

    /// `GET /api/proxy/{type}`: stats for every proxy of one type.
    pub async fn proxies_by_type(&self, ty: ProxyType) -> Result<Vec<ProxyInfo>, ApiError> {
        let path = format!("/proxy/{}", ty);
        let list: ProxyList = self.request(Method::GET, &path, None).await?.json()?;
        Ok(list.proxies)
    }

    /// `GET /api/proxy/{type}/{name}`: stats for a single named proxy.
    pub async fn proxy_by_name(&self, ty: ProxyType, name: &str) -> Result<ProxyInfo, ApiError> {
        let path = format!("/proxy/{}/{}", ty, name);
        self.request(Method::GET, &path, None).await?.json()
    }

    /// `GET /api/traffic/{name}`: one proxy's traffic history.
    pub async fn proxy_traffic(&self, name: &str) -> Result<TrafficInfo, ApiError> {
        let path = format!("/traffic/{}", name);
        self.request(Method::GET, &path, None).await?.json()
    }

    // --- shared -------------------------------------------------------------

    /// `GET /healthz`: liveness probe, outside the reserved prefix.
    pub async fn healthz(&self) -> Result<(), ApiError> {
        self.request_raw(Method::GET, "/healthz").await?;
        Ok(())
    }
}
