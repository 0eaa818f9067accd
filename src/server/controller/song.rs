use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        song::{GameListDto, RandomSongDto, SongDto, SongListDto},
    },
    server::{
        error::AppError,
        model::song::{Game, Song, SongFilter},
        service::song::SongService,
        state::AppState,
    },
};

/// Tag for grouping song catalog endpoints in OpenAPI documentation
pub static SONG_TAG: &str = "song";

#[derive(Deserialize)]
pub struct SongSearchQuery {
    pub title: Option<String>,
    pub game: Option<String>,
    pub artist: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub const_min: Option<f64>,
    pub const_max: Option<f64>,
}

impl SongSearchQuery {
    fn into_filter(self) -> SongFilter {
        SongFilter {
            title: self.title,
            game: self.game,
            artist: self.artist,
            category: self.category,
            level: self.level,
            const_min: self.const_min,
            const_max: self.const_max,
        }
    }
}

#[derive(Deserialize)]
pub struct RandomSongQuery {
    pub game: Option<String>,
    pub level: Option<String>,
}

/// Search the song catalog.
///
/// Every supplied filter must hold. `title` and `artist` match substrings; `level`,
/// `const_min` and `const_max` keep songs with at least one matching chart.
///
/// # Returns
/// - `200 OK` - Matching songs in song ID order with their charts
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/songs",
    tag = SONG_TAG,
    params(
        ("title" = Option<String>, Query, description = "Substring of the song title"),
        ("game" = Option<String>, Query, description = "Catalog game name"),
        ("artist" = Option<String>, Query, description = "Substring of the artist"),
        ("category" = Option<String>, Query, description = "Exact category"),
        ("level" = Option<String>, Query, description = "Chart level such as 13+"),
        ("const_min" = Option<f64>, Query, description = "Lowest chart constant"),
        ("const_max" = Option<f64>, Query, description = "Highest chart constant")
    ),
    responses(
        (status = 200, description = "Successfully searched songs", body = SongListDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_songs(
    State(state): State<AppState>,
    Query(query): Query<SongSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = SongService::new(&state.catalog_db);

    let songs: Vec<SongDto> = service
        .search(query.into_filter())
        .await?
        .into_iter()
        .map(Song::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(SongListDto {
            total: songs.len() as u64,
            songs,
        }),
    ))
}

/// Pick a random song.
///
/// # Returns
/// - `200 OK` - A matching song, or `{"song": null}` when nothing matches
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/songs/random",
    tag = SONG_TAG,
    params(
        ("game" = Option<String>, Query, description = "Catalog game name"),
        ("level" = Option<String>, Query, description = "Chart level such as 13+")
    ),
    responses(
        (status = 200, description = "Random song or null", body = RandomSongDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn random_song(
    State(state): State<AppState>,
    Query(query): Query<RandomSongQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = SongService::new(&state.catalog_db);

    let mut rng = StdRng::from_os_rng();
    let song = service.random(query.game, query.level, &mut rng).await?;

    Ok((
        StatusCode::OK,
        Json(RandomSongDto {
            song: song.map(Song::into_dto),
        }),
    ))
}

/// List catalog games.
///
/// # Returns
/// - `200 OK` - Games in game ID order
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games",
    tag = SONG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved games", body = GameListDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SongService::new(&state.catalog_db);

    let games: Vec<_> = service
        .get_games()
        .await?
        .into_iter()
        .map(Game::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(GameListDto {
            total: games.len() as u64,
            games,
        }),
    ))
}
