use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FriendCodeDto {
    #[serde(with = "super::api::u64_string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    pub game: String,
    pub friend_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FriendCodeListDto {
    pub friend_codes: Vec<FriendCodeDto>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertFriendCodeDto {
    #[serde(with = "super::api::u64_string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    pub game: String,
    pub friend_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameTitleDto {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameTitleListDto {
    pub games: Vec<String>,
    pub total: u64,
}
