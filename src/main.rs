use anyhow::Result;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use linklet::api::{self, handlers::AppState};
use linklet::config::{Config, DatabaseBackend};
use linklet::links::LinkService;
use linklet::redirect;
use linklet::storage::{PostgresStorage, SqliteStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration");

    // Initialize storage
    let storage: Arc<dyn Storage> = match config.database.backend {
        DatabaseBackend::Sqlite => {
            info!("Using SQLite storage: {}", config.database.url);
            Arc::new(
                SqliteStorage::new(&config.database.url, config.database.max_connections).await?,
            )
        }
        DatabaseBackend::Postgres => {
            info!("Using PostgreSQL storage: {}", config.database.url);
            Arc::new(
                PostgresStorage::new(&config.database.url, config.database.max_connections).await?,
            )
        }
    };

    info!("Initializing database...");
    storage.init().await?;
    info!("Database initialized successfully");

    let links = Arc::new(LinkService::new(storage, config.code_length));
    let state = Arc::new(AppState {
        links,
        client_origin: config.client_origin.clone(),
    });

    // API routes first so /links and /health match before the /{code}
    // catch-all on the public router. CORS is global: the list endpoint on
    // the public router is fetched by the browser client too.
    let app = api::create_api_router(Arc::clone(&state))
        .merge(redirect::create_redirect_router(state))
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);
    info!("   - Link management at http://{}/links", addr);
    info!("   - Redirects at http://{}/{{code}}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
