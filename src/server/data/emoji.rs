//! Emoji usage aggregates over the append-only `emoji_log` table.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult};

use crate::server::{
    data::query::QueryBuilder,
    model::stats::{EmojiMemberParam, EmojiUsage, EmojiUsageParam},
};

#[derive(FromQueryResult)]
struct EmojiCountRow {
    emoji: String,
    usage_count: i64,
}

/// Per-member count, with the stored user ID still unparsed.
#[derive(Debug, FromQueryResult)]
pub struct MemberCountRow {
    pub user_id: String,
    pub usage_count: i64,
}

pub struct EmojiLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmojiLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts uses of each emoji in a guild since `since`, most used first.
    ///
    /// # Arguments
    /// - `param` - Guild and optional member restriction
    /// - `since` - Inclusive start of the window
    ///
    /// # Returns
    /// - `Ok(Vec<EmojiUsage>)` - Usage per emoji in descending count order
    /// - `Err(DbErr)` - Database error during query
    pub async fn usage_by_emoji(
        &self,
        param: &EmojiUsageParam,
        since: DateTime<Utc>,
    ) -> Result<Vec<EmojiUsage>, DbErr> {
        let statement = QueryBuilder::new(
            self.db.get_database_backend(),
            "SELECT emoji, COUNT(*) AS usage_count FROM emoji_log",
        )
        .filter_eq("guild_id", Some(param.guild_id.to_string()))
        .filter_eq("user_id", param.user_id.map(|id| id.to_string()))
        .filter(Some(since), |p| format!("used_at >= {}", p))
        .group_by("emoji")
        .order_by("usage_count DESC")
        .build();

        let rows = self.db.query_all_raw(statement).await?;

        rows.iter()
            .map(|row| {
                EmojiCountRow::from_query_result(row, "").map(|r| EmojiUsage {
                    emoji: r.emoji,
                    count: r.usage_count,
                })
            })
            .collect()
    }

    /// Counts emoji uses per member in a guild since `since`, most active first.
    ///
    /// Restricted to a single emoji when `param.emoji` is set.
    pub async fn usage_by_member(
        &self,
        param: &EmojiMemberParam,
        since: DateTime<Utc>,
    ) -> Result<Vec<MemberCountRow>, DbErr> {
        let statement = QueryBuilder::new(
            self.db.get_database_backend(),
            "SELECT user_id, COUNT(*) AS usage_count FROM emoji_log",
        )
        .filter_eq("guild_id", Some(param.guild_id.to_string()))
        .filter_eq("emoji", param.emoji.clone())
        .filter(Some(since), |p| format!("used_at >= {}", p))
        .group_by("user_id")
        .order_by("usage_count DESC")
        .build();

        let rows = self.db.query_all_raw(statement).await?;

        rows.iter()
            .map(|row| MemberCountRow::from_query_result(row, ""))
            .collect()
    }
}
