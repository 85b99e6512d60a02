//! Development-time request forwarding.
//!
//! Mirrors the forwarding rule the daemons' web consoles use during
//! development: requests under the reserved `/api` prefix are rewritten
//! (prefix stripped exactly once) and re-issued against a configured backend
//! origin. The Host header is not forwarded, so the outbound request carries
//! the target's own host and the backend's same-origin checks pass.
//!
//! This module is environment configuration, not application logic: it only
//! exists under the `dev-proxy` cargo feature and the core state machine
//! never references it.

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use std::net::SocketAddr;

use crate::api::API_PREFIX;

/// Bodies larger than this are rejected; admin payloads are small.
const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

#[derive(Clone)]
struct ProxyCtx {
    target: String,
    client: reqwest::Client,
}

/// Build the forwarding router for a backend origin such as
/// `http://127.0.0.1:7400`.
pub fn router(target: impl Into<String>) -> Router {
    let mut target = target.into();
    while target.ends_with('/') {
        target.pop();
    }
    let ctx = ProxyCtx {
        target,
        client: reqwest::Client::new(),
    };
    Router::new()
        .route(API_PREFIX, any(forward))
        .route(&format!("{API_PREFIX}/*rest"), any(forward))
        .with_state(ctx)
}

/// Bind and serve the forwarding router until the process exits.
pub async fn serve(listen: SocketAddr, target: impl Into<String>) -> std::io::Result<()> {
    let target = target.into();
    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!(%listen, %target, "dev proxy listening");
    axum::serve(listener, router(target)).await
}

/// Strip the reserved prefix from a path-and-query, exactly once.
fn rewrite(path_and_query: &str) -> String {
    let rest = path_and_query
        .strip_prefix(API_PREFIX)
        .unwrap_or(path_and_query);
    if rest.is_empty() || rest.starts_with('?') {
        format!("/{rest}")
    } else {
        rest.to_string()
    }
}

async fn forward(State(ctx): State<ProxyCtx>, req: Request<Body>) -> Response {
    let (parts, body) = req.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!("{}{}", ctx.target, rewrite(path_and_query));

    let method = match reqwest::Method::from_bytes(parts.method.as_str().as_bytes()) {
        Ok(method) => method,
        Err(_) => return StatusCode::METHOD_NOT_ALLOWED.into_response(),
    };

    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
    };

    let mut outbound = ctx.client.request(method, &url).body(body);
    // Relay the headers the admin API cares about; Host is intentionally
    // rebuilt from the target origin.
    for name in [
        axum::http::header::AUTHORIZATION,
        axum::http::header::CONTENT_TYPE,
        axum::http::header::ACCEPT,
    ] {
        if let Some(value) = parts.headers.get(&name) {
            if let Ok(value) = value.to_str() {
                outbound = outbound.header(name.as_str(), value);
            }
        }
    }

    tracing::debug!(%url, "forwarding dev request");
    match outbound.send().await {
        Ok(response) => {
            let status =
                StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            // reqwest and axum sit on different `http` major versions, so
            // the header value crosses as a string.
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| HeaderValue::from_str(v).ok());
            match response.bytes().await {
                Ok(bytes) => {
                    let mut relayed = Response::new(Body::from(bytes));
                    *relayed.status_mut() = status;
                    if let Some(content_type) = content_type {
                        relayed.headers_mut().insert(CONTENT_TYPE, content_type);
                    }
                    relayed
                }
                Err(err) => {
                    (StatusCode::BAD_GATEWAY, format!("dev proxy: {err}")).into_response()
                }
            }
        }
        Err(err) => (StatusCode::BAD_GATEWAY, format!("dev proxy: {err}")).into_response(),
    }
}
