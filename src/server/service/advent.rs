//! Advent calendar entries.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::advent::AdventRepository,
    error::AppError,
    model::advent::{AdventEntry, UpsertAdventParam},
};

pub struct AdventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every entry dated within a calendar year, ordered by date.
    ///
    /// # Returns
    /// - `Ok(Vec<AdventEntry>)` - The year's entries
    /// - `Err(AppError::BadRequest)` - Year is outside the supported calendar range
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_year(&self, year: i32) -> Result<Vec<AdventEntry>, AppError> {
        let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            year.checked_add(1)
                .and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1)),
        ) else {
            return Err(AppError::BadRequest(format!("Invalid year: {}", year)));
        };

        let repo = AdventRepository::new(self.db);

        repo.get_between(start, end)
            .await?
            .into_iter()
            .map(AdventEntry::from_entity)
            .collect()
    }

    pub async fn get(&self, user_id: u64, date: NaiveDate) -> Result<Vec<AdventEntry>, AppError> {
        let repo = AdventRepository::new(self.db);

        repo.get_by_user_and_date(user_id, date)
            .await?
            .into_iter()
            .map(AdventEntry::from_entity)
            .collect()
    }

    pub async fn upsert(&self, param: UpsertAdventParam) -> Result<AdventEntry, AppError> {
        let repo = AdventRepository::new(self.db);

        AdventEntry::from_entity(repo.upsert(param).await?)
    }

    pub async fn delete(&self, user_id: u64, date: NaiveDate) -> Result<(), AppError> {
        let repo = AdventRepository::new(self.db);

        repo.delete(user_id, date).await?;

        Ok(())
    }
}
