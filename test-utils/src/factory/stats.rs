//! Statistics factories for creating emoji and message log records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an emoji usage record.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
/// - `user_id` - Discord user ID as string
/// - `emoji` - Emoji token as logged by the bot (e.g. `<:name:123>`)
/// - `used_at` - Timestamp of the usage
pub async fn create_emoji_log(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    emoji: &str,
    used_at: DateTime<Utc>,
) -> Result<entity::emoji_log::Model, DbErr> {
    entity::emoji_log::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        emoji: ActiveValue::Set(emoji.to_string()),
        used_at: ActiveValue::Set(used_at),
    }
    .insert(db)
    .await
}

/// Creates a message log record.
pub async fn create_message_log(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    sent_at: DateTime<Utc>,
) -> Result<entity::message_log::Model, DbErr> {
    entity::message_log::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set("1".to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        sent_at: ActiveValue::Set(sent_at),
    }
    .insert(db)
    .await
}
