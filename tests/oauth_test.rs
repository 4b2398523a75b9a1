//! OAuth callback integration tests.

mod common;

use common::TestServer;
use httpmock::prelude::*;
use serde_json::{json, Value};

#[tokio::test]
async fn test_callback_exchanges_code_for_token() {
    let mock_server = MockServer::start_async().await;

    let exchange_mock = mock_server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/oauth/v2/accessToken")
                .header("content-type", "application/x-www-form-urlencoded")
                .body_contains("grant_type=authorization_code")
                .body_contains("code=AQTcode123")
                .body_contains("client_id=li-client")
                .body_contains("client_secret=li-secret");
            then.status(200).json_body(json!({
                "access_token": "AQVtoken456",
                "expires_in": 5183999,
                "scope": "openid,profile,w_member_social"
            }));
        })
        .await;

    let server = TestServer::start(&mock_server.base_url()).await;

    let response = server
        .client()
        .get(server.url("/auth/callback?code=AQTcode123"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    // The token comes back in the JSON body, never in a redirect
    let json: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["accessToken"], "AQVtoken456");
    assert_eq!(json["tokenResponse"]["access_token"], "AQVtoken456");
    assert_eq!(json["tokenResponse"]["expires_in"], 5183999);

    exchange_mock.assert_async().await;
}

#[tokio::test]
async fn test_callback_without_code() {
    let mock_server = MockServer::start_async().await;
    let server = TestServer::start(&mock_server.base_url()).await;

    for path in ["/auth/callback", "/auth/callback?code="] {
        let response = server
            .client()
            .get(server.url(path))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 400, "path {}", path);

        let json: Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(json["error"], "Authorization code is required");
    }
}

#[tokio::test]
async fn test_callback_upstream_failure() {
    let mock_server = MockServer::start_async().await;

    let error_body = json!({
        "error": "invalid_grant",
        "error_description": "The provided authorization grant is invalid"
    });

    mock_server
        .mock_async(|when, then| {
            when.method(POST).path("/oauth/v2/accessToken");
            then.status(400).json_body(error_body.clone());
        })
        .await;

    let server = TestServer::start(&mock_server.base_url()).await;

    let response = server
        .client()
        .get(server.url("/auth/callback?code=expired"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 500);

    let json: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["error"], "Failed to fetch token");
    assert_eq!(json["details"], error_body);
}

#[tokio::test]
async fn test_callback_response_without_token_is_an_error() {
    let mock_server = MockServer::start_async().await;

    mock_server
        .mock_async(|when, then| {
            when.method(POST).path("/oauth/v2/accessToken");
            then.status(200).json_body(json!({"scope": "openid"}));
        })
        .await;

    let server = TestServer::start(&mock_server.base_url()).await;

    let response = server
        .client()
        .get(server.url("/auth/callback?code=AQTcode123"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 500);

    let json: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["error"], "Failed to fetch token");
    assert_eq!(json["details"]["scope"], "openid");
}
