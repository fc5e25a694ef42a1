use sqlx::PgPool;
use tracing::info;

/// Application state shared across requests.
pub struct AppState {
    /// The PostgreSQL connection pool, opened once at startup.
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        info!("Initializing application state");
        Self { db_pool }
    }
}
