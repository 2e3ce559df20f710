use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use crate::repo::{Directory, MemoryDirectory, PgDirectory};

/// Shared application state passed to axum handlers via `State`.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn Directory>,
}

impl AppState {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }
}

/// Pool created lazily; no connections open until the first query.
static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static DIRECTORY: OnceLock<Arc<dyn Directory>> = OnceLock::new();
static MIGRATED: AtomicBool = AtomicBool::new(false);

/// Create a connection pool from `DATABASE_URL`.
pub fn create_pool() -> Result<Pool<Postgres>, sqlx::Error> {
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(&database_url)
}

/// Run database migrations against the given pool.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Build the directory the served app uses: the demo catalog when the
/// `demo_catalog` flag is on, otherwise Postgres.
pub fn build_directory() -> Result<Arc<dyn Directory>, sqlx::Error> {
    if crate::config::feature_flags().demo_catalog {
        tracing::info!("Using in-memory demo catalog");
        return Ok(Arc::new(MemoryDirectory::demo()));
    }
    let pool = match POOL.get() {
        Some(pool) => pool.clone(),
        None => {
            let pool = create_pool()?;
            POOL.get_or_init(|| pool).clone()
        }
    };
    Ok(Arc::new(PgDirectory::new(pool)))
}

/// Directory for Dioxus server functions, shared process-wide.
///
/// Migrations run at most once, on the first call that reaches Postgres.
pub async fn directory() -> Result<Arc<dyn Directory>, shared_types::AppError> {
    use crate::error_convert::SqlxErrorExt;

    if let Some(dir) = DIRECTORY.get() {
        return Ok(dir.clone());
    }

    let dir = build_directory().map_err(SqlxErrorExt::into_app_error)?;

    if let Some(pool) = POOL.get() {
        if !MIGRATED.swap(true, Ordering::SeqCst) {
            if let Err(e) = run_migrations(pool).await {
                MIGRATED.store(false, Ordering::SeqCst);
                tracing::error!(error = %e, "Failed to run migrations");
                return Err(shared_types::AppError::database(e.to_string()));
            }
        }
    }

    Ok(DIRECTORY.get_or_init(|| dir).clone())
}
