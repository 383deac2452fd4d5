//! Integration tests for the OpenWeatherMap client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring every response scenario maps to the right variant of the
//! failure taxonomy.

use std::time::Duration;

use integration_weather::{OpenWeatherClient, OpenWeatherConfig, WeatherClient, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample OpenWeatherMap current-weather response for testing
fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [
            { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }
        ],
        "base": "stations",
        "main": {
            "temp": 15.0,
            "feels_like": 14.0,
            "temp_min": 12.0,
            "temp_max": 18.0,
            "pressure": 1012,
            "humidity": 70
        },
        "visibility": 10000,
        "wind": { "speed": 3.5, "deg": 240 },
        "clouds": { "all": 75 },
        "dt": 1_700_000_000,
        "sys": { "country": "GB", "sunrise": 1_699_999_000, "sunset": 1_700_030_000 },
        "timezone": 0,
        "id": 2_643_743,
        "name": "London",
        "cod": 200
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherClient {
    let config = OpenWeatherConfig {
        base_url: mock_server.uri(),
        api_key: "test-key".to_string(),
        units: "metric".to_string(),
        timeout_secs: 1,
    };
    #[allow(clippy::expect_used)]
    OpenWeatherClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /weather endpoint with the given response
async fn setup_weather_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn current_weather_success_maps_all_fields() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_weather_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("London,GB").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let conditions = result.unwrap();
    assert_eq!(conditions.location_name, "London");
    assert_eq!(conditions.region_code, "GB");
    assert!((conditions.temperature - 15.0).abs() < f64::EPSILON);
    assert!((conditions.feels_like - 14.0).abs() < f64::EPSILON);
    assert_eq!(conditions.temp_min, Some(12.0));
    assert_eq!(conditions.temp_max, Some(18.0));
    assert_eq!(conditions.humidity, 70);
    assert_eq!(conditions.pressure, 1012);
    assert!((conditions.wind_speed - 3.5).abs() < f64::EPSILON);
    assert_eq!(conditions.visibility_m, 10_000);
    assert_eq!(conditions.description, "light rain");
    assert_eq!(conditions.icon_id, "10d");
}

#[tokio::test]
async fn request_carries_query_key_and_units() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London,GB"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("London,GB").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn absent_min_max_are_reported_as_none() {
    let mock_server = MockServer::start().await;

    let mut body = sample_weather_response();
    let main = body["main"].as_object_mut().unwrap();
    main.remove("temp_min");
    main.remove("temp_max");

    setup_weather_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let conditions = client.current_weather("London").await.unwrap();

    assert!(conditions.temp_min.is_none());
    assert!(conditions.temp_max.is_none());
}

// ============================================================================
// Failure taxonomy
// ============================================================================

#[tokio::test]
async fn http_404_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404", "message": "city not found"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let err = client.current_weather("Atlantis").await.unwrap_err();

    assert!(matches!(err, WeatherError::NotFound), "got: {err:?}");
}

#[tokio::test]
async fn http_401_maps_to_unauthorized() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401, "message": "Invalid API key"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let err = client.current_weather("London").await.unwrap_err();

    assert!(matches!(err, WeatherError::Unauthorized), "got: {err:?}");
}

#[tokio::test]
async fn http_500_maps_to_upstream() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(&mock_server, ResponseTemplate::new(500)).await;

    let client = create_test_client(&mock_server);
    let err = client.current_weather("London").await.unwrap_err();

    assert!(matches!(err, WeatherError::Upstream(_)), "got: {err:?}");
}

#[tokio::test]
async fn malformed_body_maps_to_upstream() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not json at all"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let err = client.current_weather("London").await.unwrap_err();

    assert!(matches!(err, WeatherError::Upstream(_)), "got: {err:?}");
}

#[tokio::test]
async fn missing_required_numeric_maps_to_upstream() {
    let mock_server = MockServer::start().await;

    let mut body = sample_weather_response();
    body["main"].as_object_mut().unwrap().remove("temp");

    setup_weather_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let err = client.current_weather("London").await.unwrap_err();

    assert!(matches!(err, WeatherError::Upstream(_)), "got: {err:?}");
}

#[tokio::test]
async fn empty_conditions_array_maps_to_upstream() {
    let mock_server = MockServer::start().await;

    let mut body = sample_weather_response();
    body["weather"] = serde_json::json!([]);

    setup_weather_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let err = client.current_weather("London").await.unwrap_err();

    assert!(matches!(err, WeatherError::Upstream(_)), "got: {err:?}");
}

#[tokio::test]
async fn missing_visibility_maps_to_upstream() {
    let mock_server = MockServer::start().await;

    let mut body = sample_weather_response();
    body.as_object_mut().unwrap().remove("visibility");

    setup_weather_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let err = client.current_weather("London").await.unwrap_err();

    assert!(matches!(err, WeatherError::Upstream(_)), "got: {err:?}");
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_weather_response())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    // Client timeout is 1 second
    let client = create_test_client(&mock_server);
    let err = client.current_weather("London").await.unwrap_err();

    assert!(matches!(err, WeatherError::Timeout(_)), "got: {err:?}");
}
