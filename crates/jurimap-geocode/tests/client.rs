//! Integration tests for `GeocodeClient` using wiremock HTTP mocks.

use jurimap_geocode::{GeocodeClient, GeocodeError};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GeocodeClient {
    GeocodeClient::new(base_url, 10, "jurimap-test/0.1")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn resolve_returns_best_match_origin() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "lat": "20.2960587",
            "lon": "85.8245398",
            "display_name": "Bhubaneswar, Khordha, Odisha, India",
            "place_rank": 16,
            "importance": 0.6
        },
        {
            "lat": "20.5",
            "lon": "85.9",
            "display_name": "Bhubaneswar (somewhere else)"
        }
    ]);

    Mock::given(method("GET"))
        .and(query_param("q", "Bhubaneswar"))
        .and(query_param("countrycodes", "in"))
        .and(query_param("format", "jsonv2"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let origin = client
        .resolve("Bhubaneswar", "in")
        .await
        .expect("should resolve location");

    assert_eq!(origin.query, "Bhubaneswar");
    assert_eq!(origin.display_name, "Bhubaneswar, Khordha, Odisha, India");
    assert!((origin.coordinate.latitude - 20.2960587).abs() < 1e-9);
    assert!((origin.coordinate.longitude - 85.8245398).abs() < 1e-9);
}

#[tokio::test]
async fn resolve_empty_result_is_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve("asdkjaskjd999notaplace", "in").await;

    assert!(
        matches!(result, Err(GeocodeError::NoMatch { ref query }) if query == "asdkjaskjd999notaplace"),
        "expected NoMatch, got: {result:?}"
    );
}

#[tokio::test]
async fn resolve_non_200_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve("Bhubaneswar", "in").await;

    assert!(
        matches!(result, Err(GeocodeError::UnexpectedStatus { status: 503 })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}

#[tokio::test]
async fn resolve_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve("Bhubaneswar", "in").await;

    assert!(
        matches!(result, Err(GeocodeError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}
