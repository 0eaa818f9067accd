use sea_orm_migration::{prelude::*, schema::*};

use super::m20241101_000006_create_games_table::Games;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(pk_auto(Songs::SongId))
                    .col(integer(Songs::GameId))
                    .col(string(Songs::Title))
                    .col(string_null(Songs::Category))
                    .col(string_null(Songs::Artist))
                    .col(string_null(Songs::JacketUrl))
                    .col(string_null(Songs::VideoUrl))
                    .col(integer_null(Songs::BpmMin))
                    .col(integer_null(Songs::BpmMax))
                    .col(text_null(Songs::Description))
                    .col(date_null(Songs::ReleaseDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_songs_game_id")
                            .from(Songs::Table, Songs::GameId)
                            .to(Games::Table, Games::GameId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Songs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Songs {
    Table,
    SongId,
    GameId,
    Title,
    Category,
    Artist,
    JacketUrl,
    VideoUrl,
    BpmMin,
    BpmMax,
    Description,
    ReleaseDate,
}
