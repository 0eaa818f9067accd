use sea_orm_migration::{prelude::*, schema::*};

use super::m20241101_000007_create_songs_table::Songs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Charts::Table)
                    .if_not_exists()
                    .col(pk_auto(Charts::ChartId))
                    .col(integer(Charts::SongId))
                    .col(string_null(Charts::Difficulty))
                    .col(double_null(Charts::ChartConst))
                    .col(string_null(Charts::Level))
                    .col(integer_null(Charts::NumNotes))
                    .col(string_null(Charts::Designer))
                    .col(text_null(Charts::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_charts_song_id")
                            .from(Charts::Table, Charts::SongId)
                            .to(Songs::Table, Songs::SongId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_charts_song_id")
                    .table(Charts::Table)
                    .col(Charts::SongId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_charts_song_id")
                    .table(Charts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Charts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Charts {
    Table,
    ChartId,
    SongId,
    Difficulty,
    ChartConst,
    Level,
    NumNotes,
    Designer,
    Description,
}
