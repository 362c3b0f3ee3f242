use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8888".to_string());
    let partner = std::env::var("YLY_PARTNER").unwrap_or_else(|_| "1".to_string());
    let api_key = std::env::var("YLY_API_KEY").unwrap_or_else(|_| "test-key".to_string());
    let username = std::env::var("YLY_USERNAME").unwrap_or_else(|_| "test".to_string());

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %partner, "mock printer API listening");
    mock_server::run(listener, mock_server::seeded(&partner, &api_key, &username)).await
}
