//! Advent calendar entries keyed by (user ID, date).

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::advent::UpsertAdventParam;

pub struct AdventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets entries dated within `[start, end)`, ordered by date.
    ///
    /// # Arguments
    /// - `start` - Inclusive first day
    /// - `end` - Exclusive last day
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Entries in date order, ties in insertion order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<entity::advent::Model>, DbErr> {
        entity::prelude::Advent::find()
            .filter(entity::advent::Column::Date.gte(start))
            .filter(entity::advent::Column::Date.lt(end))
            .order_by_asc(entity::advent::Column::Date)
            .order_by_asc(entity::advent::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the member's entries for a date.
    pub async fn get_by_user_and_date(
        &self,
        user_id: u64,
        date: NaiveDate,
    ) -> Result<Vec<entity::advent::Model>, DbErr> {
        entity::prelude::Advent::find()
            .filter(entity::advent::Column::UserId.eq(user_id.to_string()))
            .filter(entity::advent::Column::Date.eq(date))
            .order_by_asc(entity::advent::Column::Id)
            .all(self.db)
            .await
    }

    /// Creates the entry for (user, date) or replaces its author, title and URL.
    ///
    /// Probe and write share one transaction. A concurrent first write for the same key
    /// fails on the unique index and the error is returned unchanged.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored entry
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertAdventParam) -> Result<entity::advent::Model, DbErr> {
        let user_id = param.user_id.to_string();
        let txn = self.db.begin().await?;

        let existing = entity::prelude::Advent::find()
            .filter(entity::advent::Column::UserId.eq(user_id.as_str()))
            .filter(entity::advent::Column::Date.eq(param.date))
            .one(&txn)
            .await?;

        let stored = match existing {
            Some(existing) => {
                let mut active: entity::advent::ActiveModel = existing.into();
                active.author = ActiveValue::Set(param.author);
                active.title = ActiveValue::Set(param.title);
                active.url = ActiveValue::Set(param.url);
                active.update(&txn).await?
            }
            None => {
                entity::advent::ActiveModel {
                    id: ActiveValue::NotSet,
                    user_id: ActiveValue::Set(user_id),
                    author: ActiveValue::Set(param.author),
                    title: ActiveValue::Set(param.title),
                    url: ActiveValue::Set(param.url),
                    date: ActiveValue::Set(param.date),
                }
                .insert(&txn)
                .await?
            }
        };

        txn.commit().await?;

        Ok(stored)
    }

    /// Deletes the entry for (user, date); a missing entry is not an error.
    pub async fn delete(&self, user_id: u64, date: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::Advent::delete_many()
            .filter(entity::advent::Column::UserId.eq(user_id.to_string()))
            .filter(entity::advent::Column::Date.eq(date))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
