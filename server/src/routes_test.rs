use super::*;

#[tokio::test]
async fn health_reports_healthy_status() {
    let Json(body) = health().await;
    assert_eq!(body.status, "healthy");
    assert_eq!(body.message, "Backend is running successfully");
}

#[tokio::test]
async fn message_returns_integration_greeting() {
    let Json(body) = message().await;
    assert_eq!(body.message, "You've successfully integrated the backend!");
}
