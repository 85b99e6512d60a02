//! API access layer against a real HTTP server (wiremock).

use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tunnelview::api::{ApiClient, BasicAuth};
use tunnelview::error::ApiError;
use tunnelview::models::ProxyType;

#[tokio::test]
async fn test_requests_carry_the_reserved_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None);
    let status = client.client_status().await.unwrap();
    assert_eq!(status.total(), 0);
}

#[tokio::test]
async fn test_healthz_is_not_prefixed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None);
    client.healthz().await.unwrap();
}

#[tokio::test]
async fn test_basic_auth_header_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/serverinfo"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(
        server.uri(),
        Some(BasicAuth {
            user: "admin".into(),
            password: "secret".into(),
        }),
    );
    client.server_info().await.unwrap();
}

#[tokio::test]
async fn test_status_error_carries_code_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(401).set_body_string("authorization failed"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None);
    match client.client_status().await.unwrap_err() {
        ApiError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "authorization failed");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/serverinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None);
    let err = client.server_info().await.unwrap_err();
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    // Nothing listens on this port.
    let client = ApiClient::new("http://127.0.0.1:1", None);
    let err = client.client_status().await.unwrap_err();
    assert_eq!(err.kind(), "transport");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_proxy_listing_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/proxy/tcp"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"proxies": [{"name": "ssh", "curConns": 2, "status": "online",
                "todayTrafficIn": 2048, "todayTrafficOut": 4096}]}"#,
        ))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None);
    let proxies = client.proxies_by_type(ProxyType::Tcp).await.unwrap();
    assert_eq!(proxies.len(), 1);
    assert_eq!(proxies[0].name, "ssh");
    assert_eq!(proxies[0].cur_conns, 2);
}
