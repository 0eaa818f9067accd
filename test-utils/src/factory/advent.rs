//! Advent factory for creating advent calendar entries.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating advent entries with customizable fields.
pub struct AdventFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    author: String,
    title: String,
    url: String,
    date: NaiveDate,
}

impl<'a> AdventFactory<'a> {
    /// Creates a new AdventFactory with default values.
    ///
    /// Defaults:
    /// - author: `"Author {id}"`
    /// - title: `"Entry {id}"`
    /// - url: `""`
    pub fn new(db: &'a DatabaseConnection, user_id: &str, date: NaiveDate) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: user_id.to_string(),
            author: format!("Author {}", id),
            title: format!("Entry {}", id),
            url: String::new(),
            date,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub async fn build(self) -> Result<entity::advent::Model, DbErr> {
        entity::advent::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            author: ActiveValue::Set(self.author),
            title: ActiveValue::Set(self.title),
            url: ActiveValue::Set(self.url),
            date: ActiveValue::Set(self.date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an advent entry with default values.
pub async fn create_advent(
    db: &DatabaseConnection,
    user_id: &str,
    date: NaiveDate,
) -> Result<entity::advent::Model, DbErr> {
    AdventFactory::new(db, user_id, date).build().await
}
