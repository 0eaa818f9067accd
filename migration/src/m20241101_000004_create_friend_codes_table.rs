use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key to friend_code_games: deleting a title leaves its
        // friend codes in place, hidden from every joined read.
        manager
            .create_table(
                Table::create()
                    .table(FriendCodes::Table)
                    .if_not_exists()
                    .col(pk_auto(FriendCodes::Id))
                    .col(string(FriendCodes::UserId))
                    .col(integer(FriendCodes::GameId))
                    .col(string(FriendCodes::FriendCode))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_friend_codes_user_id_game_id")
                    .table(FriendCodes::Table)
                    .col(FriendCodes::UserId)
                    .col(FriendCodes::GameId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_friend_codes_user_id_game_id")
                    .table(FriendCodes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FriendCodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FriendCodes {
    Table,
    Id,
    UserId,
    GameId,
    FriendCode,
}
