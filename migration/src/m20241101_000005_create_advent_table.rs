use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advent::Table)
                    .if_not_exists()
                    .col(pk_auto(Advent::Id))
                    .col(string(Advent::UserId))
                    .col(string(Advent::Author))
                    .col(string(Advent::Title).default(""))
                    .col(string(Advent::Url).default(""))
                    .col(date(Advent::Date))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_advent_user_id_date")
                    .table(Advent::Table)
                    .col(Advent::UserId)
                    .col(Advent::Date)
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
                    .name("idx_advent_user_id_date")
                    .table(Advent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Advent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Advent {
    Table,
    Id,
    UserId,
    Author,
    Title,
    Url,
    Date,
}
