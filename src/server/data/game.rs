//! Catalog game lookups.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::song::Game;

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::GameId)
            .all(self.db)
            .await?;

        Ok(games.into_iter().map(Game::from_entity).collect())
    }

    /// Resolves a game name to its ID.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - ID of the first game with that exact name
    /// - `Ok(None)` - No game has that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_id_by_name(&self, name: &str) -> Result<Option<i32>, DbErr> {
        let game = entity::prelude::Game::find()
            .filter(entity::game::Column::Name.eq(name))
            .order_by_asc(entity::game::Column::GameId)
            .one(self.db)
            .await?;

        Ok(game.map(|g| g.game_id))
    }

    /// Resolves many game IDs to names with a single query.
    ///
    /// IDs without a game are absent from the returned map.
    pub async fn names_by_ids(&self, game_ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if game_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::GameId.is_in(game_ids))
            .all(self.db)
            .await?;

        Ok(games.into_iter().map(|g| (g.game_id, g.name)).collect())
    }
}
