use axum::http::HeaderValue;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .expect("invalid PORT");
    let frontend_origin: HeaderValue = std::env::var("FRONTEND_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:3000".into())
        .parse()
        .expect("invalid FRONTEND_ORIGIN");

    let app = server::routes::app(frontend_origin.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, frontend_origin = ?frontend_origin, "backend listening");
    axum::serve(listener, app).await.expect("server failed");
}
