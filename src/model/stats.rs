use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmojiUsageDto {
    pub rank: u64,
    pub emoji: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmojiUsageListDto {
    pub emojis: Vec<EmojiUsageDto>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmojiMemberRankDto {
    pub rank: u64,
    #[serde(with = "super::api::u64_string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmojiMemberRankListDto {
    pub members: Vec<EmojiMemberRankDto>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyMessageCountDto {
    /// Day in `YYYY-MM-DD` form.
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyMessageCountListDto {
    pub messages: Vec<DailyMessageCountDto>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMessageLogDto {
    #[serde(with = "super::api::u64_string")]
    #[schema(value_type = String)]
    pub channel_id: u64,
    #[serde(with = "super::api::u64_string")]
    #[schema(value_type = String)]
    pub user_id: u64,
}
