//! Endpoint tests for the interactions route
//!
//! Exercise the HTTP dispatch layer: ping/pong, malformed payload
//! rejection, and command acknowledgment. The full command lifecycle is
//! covered by the application-layer tests; the Discord client here points
//! at an unroutable origin so no network traffic leaves the process.

use std::sync::Arc;

use application::{CommandLimits, FormatterConfig, WeatherCommandService};
use axum_test::TestServer;
use integration_discord::{DiscordClientConfig, DiscordRestClient};
use integration_weather::OpenWeatherConfig;
use presentation_bot::{AppState, adapters::WeatherAdapter, routes};

/// Build a server whose outbound clients point at a closed local port
///
/// # Panics
///
/// Panics if the router cannot be built (should not happen in tests).
fn test_server() -> TestServer {
    #[allow(clippy::expect_used)]
    let discord = DiscordRestClient::with_base_url(
        DiscordClientConfig {
            bot_token: "test-token".to_string(),
            application_id: "1234567890".to_string(),
            api_version: "v10".to_string(),
        },
        "http://127.0.0.1:9",
    )
    .expect("client should build");

    #[allow(clippy::expect_used)]
    let weather = WeatherAdapter::new(OpenWeatherConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: "test-key".to_string(),
        units: "metric".to_string(),
        timeout_secs: 1,
    })
    .expect("adapter should build");

    let state = AppState {
        command_service: Arc::new(WeatherCommandService::new(
            Arc::new(weather),
            &CommandLimits::default(),
            FormatterConfig::default(),
        )),
        discord: Arc::new(discord),
    };

    #[allow(clippy::expect_used)]
    TestServer::new(routes::create_router(state)).expect("server should build")
}

#[tokio::test]
async fn ping_is_answered_with_pong() {
    let server = test_server();

    let response = server
        .post("/interactions")
        .json(&serde_json::json!({
            "id": "1",
            "token": "tok",
            "type": 1
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "type": 1 }));
}

#[tokio::test]
async fn command_invocation_is_acknowledged() {
    let server = test_server();

    let response = server
        .post("/interactions")
        .json(&serde_json::json!({
            "id": "2",
            "token": "tok",
            "type": 2,
            "data": {
                "name": "weather",
                "options": [{ "name": "city", "value": "London" }]
            },
            "member": { "user": { "id": "42" } }
        }))
        .await;

    response.assert_status(axum::http::StatusCode::ACCEPTED);
}

#[tokio::test]
async fn unknown_command_is_rejected() {
    let server = test_server();

    let response = server
        .post("/interactions")
        .json(&serde_json::json!({
            "id": "3",
            "token": "tok",
            "type": 2,
            "data": { "name": "ping" },
            "member": { "user": { "id": "42" } }
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn command_without_invoker_is_rejected() {
    let server = test_server();

    let response = server
        .post("/interactions")
        .json(&serde_json::json!({
            "id": "4",
            "token": "tok",
            "type": 2,
            "data": { "name": "weather" }
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unsupported_interaction_type_is_rejected() {
    let server = test_server();

    let response = server
        .post("/interactions")
        .json(&serde_json::json!({
            "id": "5",
            "token": "tok",
            "type": 3
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}
