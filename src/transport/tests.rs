//! Tests for the transport module

use super::*;
use std::io::Read;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_transport_response_from_bytes() {
    let response = TransportResponse::from_bytes(201, &b"<customer/>"[..]);
    assert_eq!(response.status(), 201);
    assert!(response.headers().is_empty());
    assert!(response.content_encoding().is_none());

    let (status, _, mut body) = response.into_parts();
    let mut buf = String::new();
    body.read_to_string(&mut buf).unwrap();
    assert_eq!(status, 201);
    assert_eq!(buf, "<customer/>");
}

#[test]
fn test_transport_response_header_lookup_is_case_insensitive() {
    let response = TransportResponse::from_bytes(200, Vec::new())
        .with_header("Content-Encoding", "gzip")
        .unwrap()
        .with_header("X-Request-Id", "abc123")
        .unwrap();

    assert_eq!(response.header("content-encoding"), Some("gzip"));
    assert_eq!(response.header("CONTENT-ENCODING"), Some("gzip"));
    assert_eq!(response.content_encoding(), Some("gzip"));
    assert_eq!(response.header("x-request-id"), Some("abc123"));
    assert_eq!(response.header("missing"), None);
}

#[test]
fn test_transport_response_invalid_header() {
    let result = TransportResponse::from_bytes(200, Vec::new()).with_header("bad header", "x");
    assert!(matches!(result, Err(crate::Error::Transport { .. })));
}

#[tokio::test]
async fn test_transport_response_from_reqwest_keeps_raw_body() {
    let mock_server = MockServer::start().await;
    let compressed = vec![0x1f, 0x8b, 0x08, 0x00];

    Mock::given(method("GET"))
        .and(path("/merchants/m1/customers/c1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Encoding", "gzip")
                .set_body_bytes(compressed.clone()),
        )
        .mount(&mock_server)
        .await;

    let response = reqwest::get(format!("{}/merchants/m1/customers/c1", mock_server.uri()))
        .await
        .unwrap();
    let transport = TransportResponse::from_reqwest(response).await.unwrap();

    assert_eq!(transport.status(), 200);
    assert_eq!(transport.content_encoding(), Some("gzip"));

    let (_, _, mut body) = transport.into_parts();
    let mut raw = Vec::new();
    body.read_to_end(&mut raw).unwrap();
    assert_eq!(raw, compressed);
}
