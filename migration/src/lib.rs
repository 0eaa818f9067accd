//! Schema migrations for the two stores.
//!
//! `Migrator` owns the community tables of the main store. `CatalogMigrator` owns the
//! song catalog and records its history in a separate table, so both can run against
//! one database when the catalog shares the main store.

pub use sea_orm_migration::prelude::*;

mod m20241101_000001_create_emoji_log_table;
mod m20241101_000002_create_message_log_table;
mod m20241101_000003_create_friend_code_games_table;
mod m20241101_000004_create_friend_codes_table;
mod m20241101_000005_create_advent_table;
mod m20241101_000006_create_games_table;
mod m20241101_000007_create_songs_table;
mod m20241101_000008_create_charts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241101_000001_create_emoji_log_table::Migration),
            Box::new(m20241101_000002_create_message_log_table::Migration),
            Box::new(m20241101_000003_create_friend_code_games_table::Migration),
            Box::new(m20241101_000004_create_friend_codes_table::Migration),
            Box::new(m20241101_000005_create_advent_table::Migration),
        ]
    }
}

pub struct CatalogMigrator;

#[async_trait::async_trait]
impl MigratorTrait for CatalogMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241101_000006_create_games_table::Migration),
            Box::new(m20241101_000007_create_songs_table::Migration),
            Box::new(m20241101_000008_create_charts_table::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_catalog_migrations").into_iden()
    }
}
