use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let app = mock_server::seeded_app()?;
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "mock bookstore listening");
    mock_server::serve(listener, app).await?;
    Ok(())
}
