use std::sync::Arc;

use mimalloc::MiMalloc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use textdrop::config::AppConfig;
use textdrop::error::InitError;
use textdrop::routes::{self, AppState};
use textdrop::storage::MySqlStore;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(err) = run().await {
        error!(%err, "startup failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let store = init_storage(&config).await?;
    let state = AppState {
        store: Arc::new(store),
    };
    let app = routes::router(state);

    let addr = config.bind_addr();
    info!(%addr, "server starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Storage Initializer: open the shared handle and make sure the
/// `texts` table exists. Any failure here is fatal.
async fn init_storage(config: &AppConfig) -> Result<MySqlStore, InitError> {
    let store = MySqlStore::connect(&config.database_url()).await?;
    store.ensure_schema().await?;
    Ok(store)
}
