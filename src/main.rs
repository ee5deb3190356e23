use issue_tracker::{
    config::Config,
    controllers::{create_router, AppState},
    db::connection::init_pool,
    error::ConfigError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let pool = init_pool(&config.database_url, config.pool_size, config.busy_timeout_ms)
        .map_err(ConfigError::from)?;
    let app = create_router(AppState { pool });

    let listener = tokio::net::TcpListener::bind(config.app_url).await?;
    info!("Issue tracker listening on {}", config.app_url);
    axum::serve(listener, app).await?;

    Ok(())
}
