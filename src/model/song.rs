use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartDto {
    pub chart_id: i32,
    pub difficulty: Option<String>,
    #[serde(rename = "const")]
    pub chart_const: Option<f64>,
    pub level: Option<String>,
    pub num_notes: Option<i32>,
    pub designer: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SongDto {
    pub song_id: i32,
    pub game_id: i32,
    /// Display name of the catalog game, `None` when the game row is missing.
    pub game: Option<String>,
    pub title: String,
    pub category: Option<String>,
    pub artist: Option<String>,
    pub jacket_url: Option<String>,
    pub video_url: Option<String>,
    pub bpm_min: Option<i32>,
    pub bpm_max: Option<i32>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub charts: Vec<ChartDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SongListDto {
    pub songs: Vec<SongDto>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RandomSongDto {
    pub song: Option<SongDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub game_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameListDto {
    pub games: Vec<GameDto>,
    pub total: u64,
}
