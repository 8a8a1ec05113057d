/**
 * Videohub Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads configuration from the
 * environment, and serves the Axum app.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("videohub=debug,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match videohub::shared::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    let app = videohub::backend::server::create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
