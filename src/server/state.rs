//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: both `DatabaseConnection`s are pools
//! and the credentials sit behind an `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::config::ApiCredentials;

#[derive(Clone)]
pub struct AppState {
    /// Store holding emoji and message logs, friend codes and advent entries.
    pub db: DatabaseConnection,

    /// Store holding the song catalog. May share its pool with `db`.
    pub catalog_db: DatabaseConnection,

    /// Credentials checked by the Basic auth middleware.
    pub credentials: Arc<ApiCredentials>,

    /// Guild served by the legacy `/emoji-stats` endpoint.
    pub default_guild_id: Option<u64>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        catalog_db: DatabaseConnection,
        credentials: ApiCredentials,
        default_guild_id: Option<u64>,
    ) -> Self {
        Self {
            db,
            catalog_db,
            credentials: Arc::new(credentials),
            default_guild_id,
        }
    }
}
