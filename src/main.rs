use std::net::SocketAddr;

use matchday::app;
use matchday::config::Settings;
use matchday::services::match_store::MatchStore;
use matchday::utils::{constant::DB_ACQUIRE_TIMEOUT, telemetry::init_tracing};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let settings = Settings::from_env()?;

    // Lazy so the API comes up even when the store is not reachable yet.
    let db_pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .acquire_timeout(DB_ACQUIRE_TIMEOUT)
        .connect_lazy_with(settings.database.connect_options());

    match MatchStore::check_connection(&db_pool).await {
        Ok(()) => info!(
            host = %settings.database.host,
            database = %settings.database.database_name,
            "Connected to the database"
        ),
        Err(e) => error!(?e, "Failed to connect to the database"),
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.http_port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening at http://{addr}, try /api/healthz");
    axum::serve(listener, app(db_pool)).await?;

    Ok(())
}
