//! # Sample Application
//!
//! A standalone Axum web application exposing the `/sample` routes:
//! config lookup, parameter binding and validation, a role-guarded route,
//! and two read-only queries against PostgreSQL.
//!
//! ## Architecture
//!
//! - Axum handles HTTP routing and request/response lifecycle
//! - SQLx manages the application database (`sampletable1`)
//! - Collaborators are built here and handed to the router as shared state

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use sample_app::config::{AppConfig, StaticConfig};
use sample_app::db::PgDatabaseService;
use sample_app::guard::HeaderRoleGuard;
use sample_app::services::foobar::PgFoobarService;
use sample_app::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sample_app=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting sample application");

    let app_config = AppConfig::from_env();
    let values = StaticConfig::from_env();
    if values.is_empty() {
        warn!("No APP_* config values set; GET /sample will return an empty object");
    } else {
        info!("Loaded {} config values", values.len());
    }

    let app_db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&app_config.database_url)
        .await?;

    info!("Connected to application database");

    sqlx::migrate!("./migrations").run(&app_db).await?;
    info!("Application migrations complete");

    let state = AppState {
        config: Arc::new(values),
        db: Arc::new(PgDatabaseService::new(app_db.clone())),
        foobars: Arc::new(PgFoobarService::new(app_db)),
        guard: Arc::new(HeaderRoleGuard),
    };

    let app = sample_app::create_app(state, &app_config.prefix);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr).await?;
    info!(
        "Listening on {} (routes under {})",
        app_config.bind_addr, app_config.prefix
    );

    axum::serve(listener, app).await?;
    Ok(())
}
