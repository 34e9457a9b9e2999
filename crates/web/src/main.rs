use anyhow::Context;
use storage::{Catalog, SubmissionStore};

mod app;
mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::AdminKeys;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting Solution Race API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let catalog = Catalog::from_file(&config.catalog_file)
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_file))?;
    tracing::info!(
        rounds = catalog.rounds().count(),
        "Catalog loaded and validated"
    );

    let store = SubmissionStore::open(&config.data_file)
        .await
        .with_context(|| format!("Failed to open submission store at {}", config.data_file))?;
    tracing::info!(path = %store.path().display(), "Submission store ready");

    if config.admin_keys.is_empty() {
        tracing::warn!("ADMIN_KEYS is empty; instructor endpoints will reject every request");
    }

    let state = AppState::new(
        catalog,
        store,
        AdminKeys::from_comma_separated(&config.admin_keys),
    );

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    axum::serve(listener, app::build_router(state)).await?;

    Ok(())
}
