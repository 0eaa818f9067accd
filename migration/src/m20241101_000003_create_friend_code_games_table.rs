use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FriendCodeGames::Table)
                    .if_not_exists()
                    .col(pk_auto(FriendCodeGames::GameId))
                    .col(string_uniq(FriendCodeGames::Title))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FriendCodeGames::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FriendCodeGames {
    Table,
    GameId,
    Title,
}
