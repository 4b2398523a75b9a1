//! Authorization header extraction integration tests.

mod common;

use common::TestServer;
use httpmock::MockServer;
use serde_json::Value;

#[tokio::test]
async fn test_missing_auth_header() {
    let mock_server = MockServer::start_async().await;
    let server = TestServer::start(&mock_server.base_url()).await;
    let client = server.client();

    for path in ["/event/244694", "/registrants/244694", "/registrant/26361060", "/image/registrant/26361060/headshot"] {
        let response = client
            .get(server.url(path))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 400, "path {}", path);

        let json: Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(json["error"], "Missing Authorization header");
    }
}

#[tokio::test]
async fn test_malformed_auth_header() {
    let mock_server = MockServer::start_async().await;
    let server = TestServer::start(&mock_server.base_url()).await;
    let client = server.client();

    // Wrong scheme, wrong case, too few parts, too many parts, empty value
    for value in ["Basic abc123", "bearer abc123", "Bearer", "Bearer a b", "Bearer  abc123", ""] {
        let response = client
            .get(server.url("/event/244694"))
            .header("Authorization", value)
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 400, "value {:?}", value);

        let json: Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(
            json["error"], "Invalid Authorization format. Use 'Bearer <token>'",
            "value {:?}",
            value
        );
    }
}

#[tokio::test]
async fn test_valid_bearer_reaches_upstream() {
    let mock_server = MockServer::start_async().await;

    let upstream = mock_server
        .mock_async(|when, then| {
            when.method(httpmock::Method::GET)
                .path("/api/v1/events/244694.json")
                .header("authorization", "Bearer caller-token");
            then.status(200)
                .json_body(serde_json::json!({"id": 244694}));
        })
        .await;

    let server = TestServer::start(&mock_server.base_url()).await;

    let response = server
        .client()
        .get(server.url("/event/244694"))
        .header("Authorization", "Bearer caller-token")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    upstream.assert_async().await;
}
