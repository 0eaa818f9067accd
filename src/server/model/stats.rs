//! Statistics domain models for emoji usage and message activity.

use chrono::{DateTime, TimeDelta, Utc};

use crate::{
    model::stats::{
        CreateMessageLogDto, DailyMessageCountDto, EmojiMemberRankDto, EmojiUsageDto,
    },
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Look-back window applied when a request names none.
pub const DEFAULT_WINDOW_HOURS: u32 = 720;

/// Usage count of one emoji within a guild and time window.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiUsage {
    pub emoji: String,
    pub count: i64,
}

impl EmojiUsage {
    pub fn into_dto(self, rank: u64) -> EmojiUsageDto {
        EmojiUsageDto {
            rank,
            emoji: self.emoji,
            count: self.count,
        }
    }
}

/// Number of emoji uses attributed to one guild member.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiMemberUsage {
    pub user_id: u64,
    pub count: i64,
}

impl EmojiMemberUsage {
    /// Converts an aggregated row at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(EmojiMemberUsage)` - Converted usage
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user ID is not numeric
    pub fn from_row(user_id: String, count: i64) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(user_id)?,
            count,
        })
    }

    pub fn into_dto(self, rank: u64) -> EmojiMemberRankDto {
        EmojiMemberRankDto {
            rank,
            user_id: self.user_id,
            count: self.count,
        }
    }
}

/// Messages a member sent on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyMessageCount {
    /// Day in `YYYY-MM-DD` form.
    pub date: String,
    pub count: i64,
}

impl DailyMessageCount {
    pub fn into_dto(self) -> DailyMessageCountDto {
        DailyMessageCountDto {
            date: self.date,
            count: self.count,
        }
    }
}

/// Parameters for ranking emojis used in a guild.
#[derive(Debug, Clone)]
pub struct EmojiUsageParam {
    pub guild_id: u64,
    pub hours: u32,
    /// Restricts the ranking to one member's usage.
    pub user_id: Option<u64>,
}

/// Parameters for ranking members by emoji usage.
#[derive(Debug, Clone)]
pub struct EmojiMemberParam {
    pub guild_id: u64,
    /// Ranks usage of this emoji only; all emojis when `None`.
    pub emoji: Option<String>,
    pub hours: u32,
}

#[derive(Debug, Clone)]
pub struct DailyMessageParam {
    pub guild_id: u64,
    pub user_id: u64,
    pub hours: u32,
}

#[derive(Debug, Clone)]
pub struct CreateMessageLogParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub user_id: u64,
}

impl CreateMessageLogParam {
    pub fn from_dto(guild_id: u64, dto: CreateMessageLogDto) -> Self {
        Self {
            guild_id,
            channel_id: dto.channel_id,
            user_id: dto.user_id,
        }
    }
}

/// Start of a look-back window of `hours` ending now.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Start of the window
/// - `Err(AppError::BadRequest)` - Window reaches past the representable date range
pub fn window_start(hours: u32) -> Result<DateTime<Utc>, AppError> {
    TimeDelta::try_hours(i64::from(hours))
        .and_then(|window| Utc::now().checked_sub_signed(window))
        .ok_or_else(|| AppError::BadRequest(format!("Window of {} hours is too large", hours)))
}

/// Item paired with its 1-based position in a ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub rank: u64,
    pub value: T,
}

/// Ranks items already sorted by descending count.
///
/// Equal counts keep their incoming order and still receive distinct ranks.
pub fn assign_ranks<T>(items: Vec<T>) -> Vec<Ranked<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, value)| Ranked {
            rank: index as u64 + 1,
            value,
        })
        .collect()
}
