use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use jobify::router::init_router;
use jobify::state::init_app_state;
use jobify_config::ServerConfig;
use jobify_observability::{init_metrics, init_tracing, metrics_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _log_guard = init_tracing()?;
    let metrics_handle = init_metrics()?;

    let server_config = ServerConfig::from_env();
    let state = init_app_state().await?;

    if state.jwt_config.uses_dev_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .context("Failed to run migrations")?;

    if let Some(handle) = metrics_handle {
        let metrics_addr = server_config.metrics_addr();
        let listener = tokio::net::TcpListener::bind(&metrics_addr)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {}", metrics_addr))?;
        info!(addr = %metrics_addr, "Metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                tracing::error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);

    let addr = server_config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(addr = %addr, "Server running");
    info!("Swagger UI available at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app).await?;
    Ok(())
}
