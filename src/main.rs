mod model;
mod server;

use migration::{CatalogMigrator, Migrator};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config.database_url, &config).await?;
    startup::run_migrations::<Migrator>(&db, &config).await?;

    let catalog_db = if config.catalog_database_url == config.database_url {
        db.clone()
    } else {
        startup::connect_to_database(&config.catalog_database_url, &config).await?
    };
    startup::run_migrations::<CatalogMigrator>(&catalog_db, &config).await?;

    let state = AppState::new(
        db,
        catalog_db,
        config.credentials.clone(),
        config.default_guild_id,
    );

    let app = router::router(state.credentials.clone())
        .with_state(state)
        .layer(startup::cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
