use std::net::SocketAddr;

use airport_directory::server::{router, state::AppState};
use httpmock::prelude::*;
use reqwest::Client;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use url::Url;

async fn spawn_proxy(upstream: &MockServer) -> SocketAddr {
    let state = AppState::new(
        Client::new(),
        Url::parse(&upstream.url("/api/basesearch")).unwrap(),
        Url::parse(&upstream.url("/air/service-vendor")).unwrap(),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    address
}

#[tokio::test]
async fn test_search_airports_relays_upstream_json() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/basesearch")
                .query_param("query", "Del");
            then.status(200)
                .json_body(json!([{"_id": "a1", "name": "Delhi", "iata_code": "DEL"}]));
        })
        .await;
    let address = spawn_proxy(&upstream).await;

    let response = Client::new()
        .get(format!("http://{address}/api/search-airports?query=Del"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body[0]["iata_code"], "DEL");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_airports_requires_query() {
    let upstream = MockServer::start_async().await;
    let address = spawn_proxy(&upstream).await;
    let client = Client::new();

    for path in ["/api/search-airports", "/api/search-airports?query="] {
        let response = client
            .get(format!("http://{address}{path}"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Query parameter is required"}));
    }
}

#[tokio::test]
async fn test_search_airports_mirrors_upstream_status() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/basesearch");
            then.status(404).body("not here");
        })
        .await;
    let address = spawn_proxy(&upstream).await;

    let response = Client::new()
        .get(format!("http://{address}/api/search-airports?query=Xyz"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to fetch data from external API"}));
}

#[tokio::test]
async fn test_search_airports_non_json_upstream_is_internal_error() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/basesearch");
            then.status(200).body("<html>oops</html>");
        })
        .await;
    let address = spawn_proxy(&upstream).await;

    let response = Client::new()
        .get(format!("http://{address}/api/search-airports?query=Goa"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Internal Server Error"}));
}

#[tokio::test]
async fn test_vendor_relays_status_body_and_content_type() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(POST)
                .path("/air/service-vendor")
                .json_body(json!({"business_name": "Runway Cafe"}));
            then.status(201)
                .header("content-type", "application/json")
                .body(r#"{"message":"Vendor registered successfully"}"#);
        })
        .await;
    let address = spawn_proxy(&upstream).await;

    let response = Client::new()
        .post(format!("http://{address}/api/vendor"))
        .json(&json!({"business_name": "Runway Cafe"}))
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 201);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"message":"Vendor registered successfully"}"#
    );
}

#[tokio::test]
async fn test_vendor_defaults_content_type_to_text_plain() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(POST).path("/air/service-vendor");
            then.status(422).body("missing gst_number");
        })
        .await;
    let address = spawn_proxy(&upstream).await;

    let response = Client::new()
        .post(format!("http://{address}/api/vendor"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    assert_eq!(response.headers()["content-type"], "text/plain");
    assert_eq!(response.text().await.unwrap(), "missing gst_number");
}

#[tokio::test]
async fn test_vendor_rejects_malformed_json() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(POST).path("/air/service-vendor");
            then.status(200);
        })
        .await;
    let address = spawn_proxy(&upstream).await;

    let response = Client::new()
        .post(format!("http://{address}/api/vendor"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_vendor_unreachable_upstream_reports_proxy_error() {
    let state = AppState::new(
        Client::new(),
        Url::parse("http://127.0.0.1:9/api/basesearch").unwrap(),
        Url::parse("http://127.0.0.1:9/air/service-vendor").unwrap(),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    let response = Client::new()
        .post(format!("http://{address}/api/vendor"))
        .json(&json!({"business_name": "Runway Cafe"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "An internal server error occurred in the proxy."
    );
    assert!(body["error"].as_str().is_some_and(|detail| !detail.is_empty()));
}
