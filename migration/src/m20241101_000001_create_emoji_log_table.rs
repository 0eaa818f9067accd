use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmojiLog::Table)
                    .if_not_exists()
                    .col(pk_auto(EmojiLog::Id))
                    .col(string(EmojiLog::GuildId))
                    .col(string(EmojiLog::UserId))
                    .col(string(EmojiLog::Emoji))
                    .col(timestamp_with_time_zone(EmojiLog::UsedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_emoji_log_guild_id_used_at")
                    .table(EmojiLog::Table)
                    .col(EmojiLog::GuildId)
                    .col(EmojiLog::UsedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_emoji_log_guild_id_used_at")
                    .table(EmojiLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmojiLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmojiLog {
    Table,
    Id,
    GuildId,
    UserId,
    Emoji,
    UsedAt,
}
