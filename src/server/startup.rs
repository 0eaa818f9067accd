use axum::http::{header, HeaderValue, Method};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::server::{config::Config, error::AppError};

/// Connects to a database with the configured pool timeouts.
///
/// # Arguments
/// - `url` - Connection string of the store to open
/// - `config` - Application configuration holding pool timeouts
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database
/// - `Err(AppError::DbErr)` - Failed to connect to database
pub async fn connect_to_database(url: &str, config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);
    if let Some(timeout) = config.connect_timeout {
        opt.connect_timeout(timeout);
    }
    if let Some(timeout) = config.acquire_timeout {
        opt.acquire_timeout(timeout);
    }

    Ok(Database::connect(opt).await?)
}

/// Runs the pending migrations of `M` when migrations are enabled.
///
/// The main store takes `migration::Migrator` and the catalog store takes
/// `migration::CatalogMigrator`, so each store only receives its own tables.
///
/// # Returns
/// - `Ok(())` - Migrations applied or disabled
/// - `Err(AppError::DbErr)` - A migration failed
pub async fn run_migrations<M>(db: &DatabaseConnection, config: &Config) -> Result<(), AppError>
where
    M: MigratorTrait,
{
    if !config.run_migrations {
        return Ok(());
    }

    M::up(db, None).await?;
    tracing::info!("Schema up to date ({} migrations)", M::migrations().len());

    Ok(())
}

/// Builds the CORS layer from the configured origins.
///
/// With no origins configured the layer allows no cross-origin requests. Origins that
/// are not valid header values are skipped with a warning.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid allowed origin {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
