pub mod api;

use crate::api::shutdown::shutdown_signal;
use crate::api::state::AppState;
use anyhow::Context;
use api::router::create_router;
use axum::Router;
use reel_settings::ReelServerConfig;
use reel_sql::PostgresClient;
use std::sync::Arc;
use tracing::info;

/// Create the main application router and its shared state
///
/// # Arguments
///
/// * `config` - The server configuration
/// * `pool` - An optional pre-built database pool (tests hand one in)
pub async fn create_app(
    config: ReelServerConfig,
    pool: Option<sqlx::Pool<sqlx::Postgres>>,
) -> Result<(Router, Arc<AppState>), anyhow::Error> {
    let db_client = PostgresClient::new(pool, &config.database_settings)
        .await
        .with_context(|| "Failed to create Postgres client")?;

    let app_state = Arc::new(AppState {
        db_pool: db_client.pool,
        config: Arc::new(config),
    });

    let router = create_router(app_state.clone())
        .await
        .with_context(|| "Failed to create router")?;

    Ok((router, app_state))
}

/// Start the main server
pub async fn start_main_server() -> Result<(), anyhow::Error> {
    let config = ReelServerConfig::default();
    let addr = format!("0.0.0.0:{}", config.server_port);

    let (router, app_state) = create_app(config, None).await?;

    let listener = tokio::net::TcpListener::bind(addr.clone())
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("🚀 Reel server started successfully on {:?}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(app_state))
        .await
        .with_context(|| "Failed to start main server")?;

    Ok(())
}
