//! Friend code repository.
//!
//! Listings join `friend_codes` with `friend_code_games` so every entry carries its game
//! title; entries whose title was deleted are not returned. Writes address an entry by its
//! natural key (user ID, game ID), which a unique index also enforces.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, TransactionTrait,
};

use crate::server::{
    data::query::QueryBuilder,
    model::friend_code::{FriendCodeFilter, FriendCodeRow},
};

pub struct FriendCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists friend codes matching every present filter, in registration order.
    ///
    /// # Arguments
    /// - `filter` - Optional user ID and game title; both absent lists all entries
    ///
    /// # Returns
    /// - `Ok(Vec<FriendCodeRow>)` - Matching entries joined with their game title
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, filter: &FriendCodeFilter) -> Result<Vec<FriendCodeRow>, DbErr> {
        let statement = QueryBuilder::new(
            self.db.get_database_backend(),
            "SELECT fc.user_id, fcg.title AS game, fc.friend_code \
             FROM friend_codes fc \
             JOIN friend_code_games fcg ON fc.game_id = fcg.game_id",
        )
        .filter_eq("fc.user_id", filter.user_id.map(|id| id.to_string()))
        .filter_eq("fcg.title", filter.game.clone())
        .order_by("fc.id")
        .build();

        let rows = self.db.query_all_raw(statement).await?;

        rows.iter()
            .map(|row| FriendCodeRow::from_query_result(row, ""))
            .collect()
    }

    /// Registers a friend code, replacing the member's existing code for that game.
    ///
    /// Probes for the (user, game) entry and then updates or inserts inside one
    /// transaction. Two concurrent first registrations may both miss the probe; the
    /// second insert then fails on the unique index and that error is returned as is.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the member
    /// - `game_id` - ID of an existing game title
    /// - `friend_code` - Code to store
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored entry
    /// - `Err(DbErr)` - Database error, including a duplicate key from a concurrent insert
    pub async fn upsert(
        &self,
        user_id: u64,
        game_id: i32,
        friend_code: String,
    ) -> Result<entity::friend_code::Model, DbErr> {
        let user_id = user_id.to_string();
        let txn = self.db.begin().await?;

        let existing = entity::prelude::FriendCode::find()
            .filter(entity::friend_code::Column::UserId.eq(user_id.as_str()))
            .filter(entity::friend_code::Column::GameId.eq(game_id))
            .one(&txn)
            .await?;

        let stored = match existing {
            Some(existing) => {
                let mut active: entity::friend_code::ActiveModel = existing.into();
                active.friend_code = ActiveValue::Set(friend_code);
                active.update(&txn).await?
            }
            None => {
                entity::friend_code::ActiveModel {
                    id: ActiveValue::NotSet,
                    user_id: ActiveValue::Set(user_id),
                    game_id: ActiveValue::Set(game_id),
                    friend_code: ActiveValue::Set(friend_code),
                }
                .insert(&txn)
                .await?
            }
        };

        txn.commit().await?;

        Ok(stored)
    }

    /// Deletes the member's friend code for a game; a missing entry is not an error.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: u64, game_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::FriendCode::delete_many()
            .filter(entity::friend_code::Column::UserId.eq(user_id.to_string()))
            .filter(entity::friend_code::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
