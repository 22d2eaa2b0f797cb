use anyhow::Context;
use tracing_subscriber::EnvFilter;

use recsys_api::{
    api::{create_router, AppState},
    config::Config,
    db::{CatalogStore, CsvSnapshotLoader, SnapshotLoader},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recsys_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // The service never runs on partial data
    let loader = CsvSnapshotLoader::new(&config.data_dir);
    let snapshot = loader
        .load()
        .await
        .with_context(|| format!("Failed to load dataset via {} loader", loader.name()))?;
    let store = CatalogStore::new(snapshot).context("Dataset failed validation")?;

    let addr = config.bind_addr();
    let app = create_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
