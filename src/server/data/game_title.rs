//! Game titles available in the friend-code directory.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::friend_code::GameTitle;

pub struct GameTitleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameTitleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every game title ordered alphabetically.
    pub async fn get_all(&self) -> Result<Vec<GameTitle>, DbErr> {
        let titles = entity::prelude::FriendCodeGame::find()
            .order_by_asc(entity::friend_code_game::Column::Title)
            .all(self.db)
            .await?;

        Ok(titles.into_iter().map(GameTitle::from_entity).collect())
    }

    /// Finds a game title by its exact name.
    ///
    /// # Returns
    /// - `Ok(Some(GameTitle))` - Title exists
    /// - `Ok(None)` - No title with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_title(&self, title: &str) -> Result<Option<GameTitle>, DbErr> {
        let entity = entity::prelude::FriendCodeGame::find()
            .filter(entity::friend_code_game::Column::Title.eq(title))
            .one(self.db)
            .await?;

        Ok(entity.map(GameTitle::from_entity))
    }

    pub async fn create(&self, title: String) -> Result<GameTitle, DbErr> {
        let entity = entity::friend_code_game::ActiveModel {
            game_id: ActiveValue::NotSet,
            title: ActiveValue::Set(title),
        }
        .insert(self.db)
        .await?;

        Ok(GameTitle::from_entity(entity))
    }

    /// Deletes a game title by name.
    ///
    /// Friend codes registered for the title are left in place; they drop out of every
    /// listing because listings join on the title.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of titles deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_title(&self, title: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::FriendCodeGame::delete_many()
            .filter(entity::friend_code_game::Column::Title.eq(title))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
