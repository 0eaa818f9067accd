//! Emoji and message statistics.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{emoji::EmojiLogRepository, message::MessageLogRepository},
    error::AppError,
    model::stats::{
        assign_ranks, window_start, CreateMessageLogParam, DailyMessageCount, DailyMessageParam,
        EmojiMemberParam, EmojiMemberUsage, EmojiUsage, EmojiUsageParam, Ranked,
        DEFAULT_WINDOW_HOURS,
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranks the guild's emojis by usage over the last `param.hours` hours.
    pub async fn emoji_ranking(
        &self,
        param: EmojiUsageParam,
    ) -> Result<Vec<Ranked<EmojiUsage>>, AppError> {
        let repo = EmojiLogRepository::new(self.db);

        let usage = repo
            .usage_by_emoji(&param, window_start(param.hours)?)
            .await?;

        Ok(assign_ranks(usage))
    }

    /// Emoji usage of a guild over the default window, for the legacy map endpoint.
    pub async fn emoji_counts(&self, guild_id: u64) -> Result<Vec<EmojiUsage>, AppError> {
        let repo = EmojiLogRepository::new(self.db);
        let param = EmojiUsageParam {
            guild_id,
            hours: DEFAULT_WINDOW_HOURS,
            user_id: None,
        };

        Ok(repo
            .usage_by_emoji(&param, window_start(param.hours)?)
            .await?)
    }

    /// Ranks guild members by emoji usage, for one emoji or all of them.
    ///
    /// # Returns
    /// - `Ok(Vec<Ranked<EmojiMemberUsage>>)` - Members ranked 1..N by usage
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored user ID is not numeric
    pub async fn member_ranking(
        &self,
        param: EmojiMemberParam,
    ) -> Result<Vec<Ranked<EmojiMemberUsage>>, AppError> {
        let repo = EmojiLogRepository::new(self.db);

        let rows = repo
            .usage_by_member(&param, window_start(param.hours)?)
            .await?;

        let members = rows
            .into_iter()
            .map(|row| EmojiMemberUsage::from_row(row.user_id, row.usage_count))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(assign_ranks(members))
    }

    pub async fn daily_messages(
        &self,
        param: DailyMessageParam,
    ) -> Result<Vec<DailyMessageCount>, AppError> {
        let repo = MessageLogRepository::new(self.db);

        Ok(repo.daily_counts(&param, window_start(param.hours)?).await?)
    }

    pub async fn log_message(&self, param: CreateMessageLogParam) -> Result<(), AppError> {
        let repo = MessageLogRepository::new(self.db);

        repo.create(param).await?;

        Ok(())
    }
}
