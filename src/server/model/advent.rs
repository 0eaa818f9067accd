//! Advent calendar domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::advent::{AdventEntryDto, UpsertAdventDto},
    server::{
        error::AppError,
        util::parse::{parse_date, parse_u64_from_string},
    },
};

/// One member's advent calendar post for a day.
#[derive(Debug, Clone, PartialEq)]
pub struct AdventEntry {
    pub id: i32,
    pub user_id: u64,
    pub author: String,
    pub title: String,
    pub url: String,
    pub date: NaiveDate,
}

impl AdventEntry {
    /// Converts an entity model to an advent entry at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(AdventEntry)` - The converted entry
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user ID is not numeric
    pub fn from_entity(entity: entity::advent::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: parse_u64_from_string(entity.user_id)?,
            author: entity.author,
            title: entity.title,
            url: entity.url,
            date: entity.date,
        })
    }

    pub fn into_dto(self) -> AdventEntryDto {
        AdventEntryDto {
            user_id: self.user_id,
            author: self.author,
            title: self.title,
            url: self.url,
            date: self.date,
        }
    }
}

/// Parameters for creating or replacing the entry keyed by (user, date).
///
/// `title` and `url` are never absent here; missing input becomes an empty string.
#[derive(Debug, Clone)]
pub struct UpsertAdventParam {
    pub user_id: u64,
    pub author: String,
    pub title: String,
    pub url: String,
    pub date: NaiveDate,
}

impl UpsertAdventParam {
    /// Converts the request body, parsing its date.
    ///
    /// # Returns
    /// - `Ok(UpsertAdventParam)` - Parameters with `title`/`url` defaulted to `""`
    /// - `Err(AppError::DateParseErr)` - `date` is not `YYYY-MM-DD`
    pub fn from_dto(dto: UpsertAdventDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id: dto.user_id,
            author: dto.author,
            title: dto.title.unwrap_or_default(),
            url: dto.url.unwrap_or_default(),
            date: parse_date(&dto.date)?,
        })
    }
}
