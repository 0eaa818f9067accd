//! Catalog factories for creating games, songs and charts.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating catalog games.
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Game {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Game {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            game_id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catalog game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}

/// Factory for creating songs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let song = SongFactory::new(&db, game.game_id)
///     .title("Love Letter")
///     .artist("Composer")
///     .category("POPS")
///     .build()
///     .await?;
/// ```
pub struct SongFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    title: String,
    category: Option<String>,
    artist: Option<String>,
    release_date: Option<NaiveDate>,
}

impl<'a> SongFactory<'a> {
    /// Creates a new SongFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Song {id}"`
    /// - category: `"ORIGINAL"`
    /// - artist: `"Artist {id}"`
    /// - release_date: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `game_id` - Catalog game the song belongs to
    pub fn new(db: &'a DatabaseConnection, game_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            game_id,
            title: format!("Song {}", id),
            category: Some("ORIGINAL".to_string()),
            artist: Some(format!("Artist {}", id)),
            release_date: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub async fn build(self) -> Result<entity::song::Model, DbErr> {
        entity::song::ActiveModel {
            song_id: ActiveValue::NotSet,
            game_id: ActiveValue::Set(self.game_id),
            title: ActiveValue::Set(self.title),
            category: ActiveValue::Set(self.category),
            artist: ActiveValue::Set(self.artist),
            jacket_url: ActiveValue::Set(None),
            video_url: ActiveValue::Set(None),
            bpm_min: ActiveValue::Set(Some(120)),
            bpm_max: ActiveValue::Set(Some(180)),
            description: ActiveValue::Set(None),
            release_date: ActiveValue::Set(self.release_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a song with default values for the given game.
pub async fn create_song(
    db: &DatabaseConnection,
    game_id: i32,
) -> Result<entity::song::Model, DbErr> {
    SongFactory::new(db, game_id).build().await
}

/// Factory for creating charts of a song.
pub struct ChartFactory<'a> {
    db: &'a DatabaseConnection,
    song_id: i32,
    difficulty: String,
    chart_const: Option<f64>,
    level: String,
    num_notes: Option<i32>,
}

impl<'a> ChartFactory<'a> {
    /// Creates a new ChartFactory with default values.
    ///
    /// Defaults:
    /// - difficulty: `"MASTER"`
    /// - chart_const: `13.0`
    /// - level: `"13"`
    /// - num_notes: `1000`
    pub fn new(db: &'a DatabaseConnection, song_id: i32) -> Self {
        Self {
            db,
            song_id,
            difficulty: "MASTER".to_string(),
            chart_const: Some(13.0),
            level: "13".to_string(),
            num_notes: Some(1000),
        }
    }

    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn chart_const(mut self, chart_const: f64) -> Self {
        self.chart_const = Some(chart_const);
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub async fn build(self) -> Result<entity::chart::Model, DbErr> {
        entity::chart::ActiveModel {
            chart_id: ActiveValue::NotSet,
            song_id: ActiveValue::Set(self.song_id),
            difficulty: ActiveValue::Set(Some(self.difficulty)),
            chart_const: ActiveValue::Set(self.chart_const),
            level: ActiveValue::Set(Some(self.level)),
            num_notes: ActiveValue::Set(self.num_notes),
            designer: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a chart with default values for the given song.
pub async fn create_chart(
    db: &DatabaseConnection,
    song_id: i32,
) -> Result<entity::chart::Model, DbErr> {
    ChartFactory::new(db, song_id).build().await
}
