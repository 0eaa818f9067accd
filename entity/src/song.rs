use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "songs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub song_id: i32,
    pub game_id: i32,
    pub title: String,
    pub category: Option<String>,
    pub artist: Option<String>,
    pub jacket_url: Option<String>,
    pub video_url: Option<String>,
    pub bpm_min: Option<i32>,
    pub bpm_max: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub release_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::GameId"
    )]
    Game,
    #[sea_orm(has_many = "super::chart::Entity")]
    Chart,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::chart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
