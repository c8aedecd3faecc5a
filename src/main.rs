use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;

use lexdemo::config::{validate_env, ServerConfig, WebhookConfig};
use lexdemo::utils::webhook::WebhookClient;
use lexdemo::{app_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lexdemo=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    validate_env();
    let server = ServerConfig::from_env()?;
    let state = Arc::new(AppState {
        webhooks: WebhookConfig::from_env(),
        webhook_client: WebhookClient::new(server.upstream_timeout)?,
    });
    let app = app_router(state, server.cors_origin()?);

    tracing::info!("Starting server on port {}", server.port);
    let listener = TcpListener::bind(("0.0.0.0", server.port)).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
