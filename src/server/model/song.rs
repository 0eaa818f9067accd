//! Song catalog domain models.
//!
//! Songs are read through a grouped join that aggregates each song's charts into a JSON
//! array held in one text column. `SongRow` is that raw row; `Song::from_row` decodes the
//! aggregate into typed charts.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::song::{ChartDto, GameDto, SongDto};

/// Catalog game.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub game_id: i32,
    pub name: String,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            game_id: entity.game_id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            game_id: self.game_id,
            name: self.name,
        }
    }
}

/// Playable chart of a song at one difficulty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chart {
    pub chart_id: i32,
    pub difficulty: Option<String>,
    #[serde(rename = "const")]
    pub chart_const: Option<f64>,
    pub level: Option<String>,
    pub num_notes: Option<i32>,
    pub designer: Option<String>,
    pub description: Option<String>,
}

impl Chart {
    pub fn into_dto(self) -> ChartDto {
        ChartDto {
            chart_id: self.chart_id,
            difficulty: self.difficulty,
            chart_const: self.chart_const,
            level: self.level,
            num_notes: self.num_notes,
            designer: self.designer,
            description: self.description,
        }
    }
}

/// Aggregated chart element as produced by the store.
///
/// Every field is nullable because a song without charts still yields one element from
/// the outer join, with all fields null.
#[derive(Deserialize)]
struct AggregatedChart {
    chart_id: Option<i32>,
    difficulty: Option<String>,
    #[serde(rename = "const")]
    chart_const: Option<f64>,
    level: Option<String>,
    num_notes: Option<i32>,
    designer: Option<String>,
    description: Option<String>,
}

/// Decodes an aggregated chart column.
///
/// Elements without a `chart_id` are dropped so a chartless song decodes to an empty
/// list. Charts are returned in `chart_id` order since aggregation order is unspecified.
///
/// # Returns
/// - `Ok(Vec<Chart>)` - Decoded charts, possibly empty
/// - `Err(serde_json::Error)` - Column is not a JSON array of chart objects
pub fn decode_charts(raw: &str) -> Result<Vec<Chart>, serde_json::Error> {
    let aggregated: Vec<AggregatedChart> = serde_json::from_str(raw)?;

    let mut charts: Vec<Chart> = aggregated
        .into_iter()
        .filter_map(|chart| {
            Some(Chart {
                chart_id: chart.chart_id?,
                difficulty: chart.difficulty,
                chart_const: chart.chart_const,
                level: chart.level,
                num_notes: chart.num_notes,
                designer: chart.designer,
                description: chart.description,
            })
        })
        .collect();
    charts.sort_by_key(|chart| chart.chart_id);

    Ok(charts)
}

/// Row of the grouped song / chart join.
#[derive(Debug, Clone, sea_orm::FromQueryResult)]
pub struct SongRow {
    pub song_id: i32,
    pub game_id: i32,
    pub title: String,
    pub category: Option<String>,
    pub artist: Option<String>,
    pub jacket_url: Option<String>,
    pub video_url: Option<String>,
    pub bpm_min: Option<i32>,
    pub bpm_max: Option<i32>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// JSON array of the song's charts.
    pub charts: String,
}

/// Song with its charts and, once resolved, the name of its game.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub song_id: i32,
    pub game_id: i32,
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
    pub charts: Vec<Chart>,
}

impl Song {
    /// Decodes a joined row. The game name is left unresolved.
    pub fn from_row(row: SongRow) -> Result<Self, serde_json::Error> {
        let charts = decode_charts(&row.charts)?;

        Ok(Self {
            song_id: row.song_id,
            game_id: row.game_id,
            game: None,
            title: row.title,
            category: row.category,
            artist: row.artist,
            jacket_url: row.jacket_url,
            video_url: row.video_url,
            bpm_min: row.bpm_min,
            bpm_max: row.bpm_max,
            description: row.description,
            release_date: row.release_date,
            charts,
        })
    }

    pub fn into_dto(self) -> SongDto {
        SongDto {
            song_id: self.song_id,
            game_id: self.game_id,
            game: self.game,
            title: self.title,
            category: self.category,
            artist: self.artist,
            jacket_url: self.jacket_url,
            video_url: self.video_url,
            bpm_min: self.bpm_min,
            bpm_max: self.bpm_max,
            description: self.description,
            release_date: self.release_date,
            charts: self.charts.into_iter().map(Chart::into_dto).collect(),
        }
    }
}

/// Optional song search filters as received from a caller.
#[derive(Debug, Clone, Default)]
pub struct SongFilter {
    pub title: Option<String>,
    /// Catalog game name, resolved to an ID before querying.
    pub game: Option<String>,
    pub artist: Option<String>,
    pub category: Option<String>,
    /// Keeps songs having at least one chart of this level.
    pub level: Option<String>,
    /// Keeps songs having at least one chart whose constant lies in the range.
    pub const_min: Option<f64>,
    pub const_max: Option<f64>,
}

/// Song filters with the game name resolved.
#[derive(Debug, Clone, Default)]
pub struct SongSearchParams {
    pub title: Option<String>,
    /// Outer `None` applies no game filter. `Some(None)` is a game name that matched no
    /// catalog game and filters everything out.
    pub game_id: Option<Option<i32>>,
    pub artist: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub const_min: Option<f64>,
    pub const_max: Option<f64>,
}

impl SongSearchParams {
    pub fn from_filter(filter: SongFilter, game_id: Option<Option<i32>>) -> Self {
        Self {
            title: filter.title,
            game_id,
            artist: filter.artist,
            category: filter.category,
            level: filter.level,
            const_min: filter.const_min,
            const_max: filter.const_max,
        }
    }
}
