use sea_orm::entity::prelude::*;

/// Friend code of a user for one game title.
///
/// `game_id` references `friend_code_games.game_id` without a foreign key, so
/// removing a title leaves its codes orphaned rather than cascading. The
/// `(user_id, game_id)` unique index is created by the migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "friend_codes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub game_id: i32,
    pub friend_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
