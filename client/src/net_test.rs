use super::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://localhost:8000/");
    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[tokio::test]
async fn fetch_health_parses_backend_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "healthy",
            "message": "Backend is running successfully"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let info = client.fetch_health().await.expect("health fetch");
    assert_eq!(info.status, "healthy");
    assert_eq!(info.message, "Backend is running successfully");
}

#[tokio::test]
async fn fetch_message_surfaces_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/message"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.fetch_message().await.expect_err("should fail");
    match err {
        ClientError::UnexpectedStatus { path, status } => {
            assert_eq!(path, "/api/message");
            assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_health_surfaces_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.fetch_health().await.expect_err("should fail");
    assert!(matches!(err, ClientError::Http(_)));
}
