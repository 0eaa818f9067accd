use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MessageLog::Table)
                    .if_not_exists()
                    .col(pk_auto(MessageLog::Id))
                    .col(string(MessageLog::GuildId))
                    .col(string(MessageLog::ChannelId))
                    .col(string(MessageLog::UserId))
                    .col(timestamp_with_time_zone(MessageLog::SentAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_log_guild_id_user_id")
                    .table(MessageLog::Table)
                    .col(MessageLog::GuildId)
                    .col(MessageLog::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_message_log_guild_id_user_id")
                    .table(MessageLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MessageLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MessageLog {
    Table,
    Id,
    GuildId,
    ChannelId,
    UserId,
    SentAt,
}
