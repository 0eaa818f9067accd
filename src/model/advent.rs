use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdventEntryDto {
    #[serde(with = "super::api::u64_string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    pub author: String,
    pub title: String,
    pub url: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdventEntryListDto {
    pub entries: Vec<AdventEntryDto>,
    pub total: u64,
}

/// Body of an advent upsert.
///
/// `date` stays a string so that a malformed value is reported as a date
/// format error rather than a generic body rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertAdventDto {
    #[serde(with = "super::api::u64_string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    pub author: String,
    pub title: Option<String>,
    pub url: Option<String>,
    /// Day in `YYYY-MM-DD` form.
    pub date: String,
}
