use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        stats::{
            CreateMessageLogDto, DailyMessageCountListDto, EmojiMemberRankListDto,
            EmojiUsageListDto,
        },
    },
    server::{
        error::AppError,
        model::stats::{
            CreateMessageLogParam, DailyMessageCount, DailyMessageParam, EmojiMemberParam,
            EmojiUsageParam, DEFAULT_WINDOW_HOURS,
        },
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

fn default_hours() -> u32 {
    DEFAULT_WINDOW_HOURS
}

#[derive(Deserialize)]
pub struct EmojiUsageQuery {
    #[serde(default = "default_hours")]
    pub hours: u32,
    pub user_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct EmojiMemberQuery {
    pub emoji: Option<String>,
    #[serde(default = "default_hours")]
    pub hours: u32,
}

#[derive(Deserialize)]
pub struct WindowQuery {
    #[serde(default = "default_hours")]
    pub hours: u32,
}

/// Get emoji usage counts for the default guild.
///
/// Legacy endpoint returning a flat `{emoji: count}` map over the last 720 hours for the
/// guild configured by `DEFAULT_GUILD_ID`.
///
/// # Returns
/// - `200 OK` - Map of emoji to usage count
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `404 Not Found` - No default guild configured
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/emoji-stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Emoji usage counts keyed by emoji", body = HashMap<String, i64>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "No default guild configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_emoji_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let guild_id = state
        .default_guild_id
        .ok_or_else(|| AppError::NotFound("No default guild configured".to_string()))?;

    let usage = StatsService::new(&state.db).emoji_counts(guild_id).await?;

    let counts: HashMap<String, i64> = usage
        .into_iter()
        .map(|usage| (usage.emoji, usage.count))
        .collect();

    Ok((StatusCode::OK, Json(counts)))
}

/// Rank a guild's emojis by usage.
///
/// Returns emojis used in the guild within the last `hours` hours, most used first,
/// with 1-based ranks. Optionally restricted to a single member.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guild_id` - Discord guild ID
/// - `query` - Window in hours (default 720) and optional member
///
/// # Returns
/// - `200 OK` - Ranked emoji usage
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/emojis",
    tag = STATS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("hours" = Option<u32>, Query, description = "Look-back window in hours (default: 720)"),
        ("user_id" = Option<u64>, Query, description = "Only count this member's usage")
    ),
    responses(
        (status = 200, description = "Successfully ranked emoji usage", body = EmojiUsageListDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_emoji_ranking(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Query(query): Query<EmojiUsageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StatsService::new(&state.db);

    let ranked = service
        .emoji_ranking(EmojiUsageParam {
            guild_id,
            hours: query.hours,
            user_id: query.user_id,
        })
        .await?;

    let emojis: Vec<_> = ranked
        .into_iter()
        .map(|r| r.value.into_dto(r.rank))
        .collect();

    Ok((
        StatusCode::OK,
        Json(EmojiUsageListDto {
            total: emojis.len() as u64,
            emojis,
        }),
    ))
}

/// Rank a guild's members by emoji usage.
///
/// Ranks members by how often they used `emoji`, or any emoji when it is omitted.
///
/// # Returns
/// - `200 OK` - Ranked members
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/emojis/members",
    tag = STATS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("emoji" = Option<String>, Query, description = "Emoji to rank members for (default: all)"),
        ("hours" = Option<u32>, Query, description = "Look-back window in hours (default: 720)")
    ),
    responses(
        (status = 200, description = "Successfully ranked members", body = EmojiMemberRankListDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_emoji_members(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Query(query): Query<EmojiMemberQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StatsService::new(&state.db);

    let ranked = service
        .member_ranking(EmojiMemberParam {
            guild_id,
            emoji: query.emoji,
            hours: query.hours,
        })
        .await?;

    let members: Vec<_> = ranked
        .into_iter()
        .map(|r| r.value.into_dto(r.rank))
        .collect();

    Ok((
        StatusCode::OK,
        Json(EmojiMemberRankListDto {
            total: members.len() as u64,
            members,
        }),
    ))
}

/// Record a message sent in a guild channel.
///
/// # Returns
/// - `201 Created` - Message recorded
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/messages",
    tag = STATS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CreateMessageLogDto,
    responses(
        (status = 201, description = "Message recorded"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_message_log(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateMessageLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StatsService::new(&state.db);

    service
        .log_message(CreateMessageLogParam::from_dto(guild_id, payload))
        .await?;

    Ok(StatusCode::CREATED)
}

/// Count a member's messages per day.
///
/// Days without messages are omitted; days are listed oldest first.
///
/// # Returns
/// - `200 OK` - Message counts per day
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/messages/{user_id}",
    tag = STATS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = u64, Path, description = "Discord user ID"),
        ("hours" = Option<u32>, Query, description = "Look-back window in hours (default: 720)")
    ),
    responses(
        (status = 200, description = "Successfully counted messages", body = DailyMessageCountListDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_daily_messages(
    State(state): State<AppState>,
    Path((guild_id, user_id)): Path<(u64, u64)>,
    Query(query): Query<WindowQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StatsService::new(&state.db);

    let days = service
        .daily_messages(DailyMessageParam {
            guild_id,
            user_id,
            hours: query.hours,
        })
        .await?;

    let messages: Vec<_> = days.into_iter().map(DailyMessageCount::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(DailyMessageCountListDto {
            total: messages.len() as u64,
            messages,
        }),
    ))
}
