use super::helpers::{StubResponse, StubServer, client, closed_port_url, query_value};
use bytes::Bytes;
use giphy_feed::{
    domain::shared::connection_error::ConnectionError,
    infrastructure::network::{
        config::NetworkConfig,
        data_transfer_service::{DataTransferService, DataTransferServiceLoader},
        decoder::{JsonResponseDecoder, RawDataResponseDecoder},
        endpoint::{Endpoint, HttpMethod},
        errors::{DataTransferError, NetworkError},
        network_service::{NetworkService, NetworkServiceLoader},
    },
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use url::Url;

fn network(base_url: Url) -> NetworkServiceLoader {
    let config = NetworkConfig::new(base_url)
        .with_header("Accept", "application/json")
        .with_query_parameter("api_key", "integration-key");
    NetworkServiceLoader::with_client(config, client())
}

fn raw(path: &str) -> Endpoint<Bytes> {
    Endpoint::new(path, HttpMethod::Get, RawDataResponseDecoder)
}

#[derive(Debug, Deserialize, PartialEq)]
struct Status {
    ok: bool,
}

#[tokio::test]
async fn successful_exchange_returns_body_and_sends_default_query() {
    let server = StubServer::spawn(|_| StubResponse::json(200, &json!({ "ok": true }))).await;

    let body = network(server.base_url.clone())
        .request(&raw("/v1/status").with_query_parameter("limit", 3))
        .await
        .expect("request should succeed");

    assert_eq!(body.as_deref(), Some(&br#"{"ok":true}"#[..]));
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path(), "/v1/status");
    assert_eq!(query_value(&requests[0], "api_key").as_deref(), Some("integration-key"));
    assert_eq!(query_value(&requests[0], "limit").as_deref(), Some("3"));
}

#[tokio::test]
async fn unsuccessful_status_carries_code_and_body() {
    let server = StubServer::spawn(|_| StubResponse::not_found()).await;

    let err = network(server.base_url.clone())
        .request(&raw("/v1/missing"))
        .await
        .unwrap_err();

    match err {
        NetworkError::HttpStatus { status_code, body } => {
            assert_eq!(status_code, 404);
            assert_eq!(body.as_deref(), Some(&b"not found"[..]));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_is_not_connected() {
    let err = network(closed_port_url().await)
        .request(&raw("/v1/status"))
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::NotConnected), "got {err:?}");
    assert!(err.is_internet_connection_error());
}

#[tokio::test]
async fn data_transfer_decodes_json_over_http() {
    let server = StubServer::spawn(|_| StubResponse::json(200, &json!({ "ok": true }))).await;
    let service = DataTransferServiceLoader::new(Arc::new(network(server.base_url.clone())));
    let endpoint: Endpoint<Status> =
        Endpoint::new("/v1/status", HttpMethod::Get, JsonResponseDecoder::new());

    let status = service.request(&endpoint).await.unwrap();

    assert_eq!(status, Status { ok: true });
}

#[tokio::test]
async fn data_transfer_reports_undecodable_body_as_parsing() {
    let server = StubServer::spawn(|_| StubResponse::json(200, &json!(["not", "an", "object"]))).await;
    let service = DataTransferServiceLoader::new(Arc::new(network(server.base_url.clone())));
    let endpoint: Endpoint<Status> =
        Endpoint::new("/v1/status", HttpMethod::Get, JsonResponseDecoder::new());

    let err = service.request(&endpoint).await.unwrap_err();

    assert!(matches!(err, DataTransferError::Parsing(_)));
    assert!(!err.is_internet_connection_error());
}

#[tokio::test]
async fn full_path_endpoint_skips_base_url_and_default_query() {
    let server = StubServer::spawn(|_| StubResponse::bytes(b"GIF89a")).await;
    let unrelated_base = Url::parse("http://example.invalid").unwrap();
    let endpoint = Endpoint::full_path(
        server.url("/media/abc/100w.gif?cid=7"),
        HttpMethod::Get,
        RawDataResponseDecoder,
    );

    let body = network(unrelated_base).request(&endpoint).await.unwrap();

    assert_eq!(body.as_deref(), Some(&b"GIF89a"[..]));
    let requests = server.requests();
    assert_eq!(query_value(&requests[0], "cid").as_deref(), Some("7"));
    assert_eq!(query_value(&requests[0], "api_key"), None);
}
