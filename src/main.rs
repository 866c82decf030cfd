use shop_agent::lifecycle::{setup_tracing, AppConfig, ShopSystem};
use shop_agent::server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr();
    let allowed_origin = config.allowed_origin.clone();
    if config.gemini.api_key.is_none() {
        info!("GEMINI_API_KEY is not set; agent runs will fail until it is");
    }

    let system = ShopSystem::new(config)?;
    let app = server::router(system.app_state(), allowed_origin);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
