use std::sync::Arc;

use tracing::info;

use happycat_catalog::{seed, CatalogService, MemoryStore};
use happycat_server::router::build_router;
use happycat_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    happycat_core::config::load_dotenv();
    let config = happycat_core::Config::from_env();
    config.log_summary();

    let store = Arc::new(MemoryStore::with_records(seed::seed_records()));
    let service = CatalogService::new(store, config.catalog.list_cap);
    let state = Arc::new(AppState::new(service, config.auth.admin_token.clone()));

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Happy Cat API listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
