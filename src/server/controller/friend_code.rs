use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        friend_code::{
            FriendCodeDto, FriendCodeListDto, GameTitleDto, GameTitleListDto, UpsertFriendCodeDto,
        },
    },
    server::{
        error::AppError,
        model::friend_code::{FriendCode, FriendCodeFilter, UpsertFriendCodeParam},
        service::friend_code::FriendCodeService,
        state::AppState,
    },
};

/// Tag for grouping friend code endpoints in OpenAPI documentation
pub static FRIEND_CODE_TAG: &str = "friend_code";

#[derive(Deserialize)]
pub struct FriendCodeQuery {
    pub user_id: Option<u64>,
    pub game: Option<String>,
}

/// List the games friend codes can be registered for.
///
/// # Returns
/// - `200 OK` - Game titles ordered by title
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/friend-codes/games",
    tag = FRIEND_CODE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved game titles", body = GameTitleListDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_titles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = FriendCodeService::new(&state.db);

    let games: Vec<String> = service
        .get_titles()
        .await?
        .into_iter()
        .map(|game| game.title)
        .collect();

    Ok((
        StatusCode::OK,
        Json(GameTitleListDto {
            total: games.len() as u64,
            games,
        }),
    ))
}

/// Register a new game title.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Title to register
///
/// # Returns
/// - `201 Created` - Title registered
/// - `400 Bad Request` - Title is blank or already registered
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/friend-codes/games",
    tag = FRIEND_CODE_TAG,
    request_body = GameTitleDto,
    responses(
        (status = 201, description = "Successfully registered game title", body = GameTitleDto),
        (status = 400, description = "Blank or duplicate title", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game_title(
    State(state): State<AppState>,
    Json(payload): Json<GameTitleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FriendCodeService::new(&state.db);

    let game = service.create_title(payload.title).await?;

    Ok((StatusCode::CREATED, Json(GameTitleDto { title: game.title })))
}

/// Delete a game title.
///
/// Friend codes registered for the title are left in place. Deleting a title that does
/// not exist succeeds.
///
/// # Returns
/// - `204 No Content` - Title deleted or absent
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/friend-codes/games/{title}",
    tag = FRIEND_CODE_TAG,
    params(
        ("title" = String, Path, description = "Game title")
    ),
    responses(
        (status = 204, description = "Game title deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = FriendCodeService::new(&state.db);

    service.delete_title(&title).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List friend codes, optionally restricted to a member and/or a game title.
///
/// # Returns
/// - `200 OK` - Matching friend codes
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/friend-codes",
    tag = FRIEND_CODE_TAG,
    params(
        ("user_id" = Option<String>, Query, description = "Discord user ID"),
        ("game" = Option<String>, Query, description = "Game title")
    ),
    responses(
        (status = 200, description = "Successfully retrieved friend codes", body = FriendCodeListDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friend_codes(
    State(state): State<AppState>,
    Query(query): Query<FriendCodeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = FriendCodeService::new(&state.db);

    let friend_codes: Vec<FriendCodeDto> = service
        .list(FriendCodeFilter {
            user_id: query.user_id,
            game: query.game,
        })
        .await?
        .into_iter()
        .map(FriendCode::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(FriendCodeListDto {
            total: friend_codes.len() as u64,
            friend_codes,
        }),
    ))
}

/// Register or replace a member's friend code for a game.
///
/// # Returns
/// - `200 OK` - Stored friend code
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `404 Not Found` - Game title is not registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/friend-codes",
    tag = FRIEND_CODE_TAG,
    request_body = UpsertFriendCodeDto,
    responses(
        (status = 200, description = "Successfully stored friend code", body = FriendCodeDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Game title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_friend_code(
    State(state): State<AppState>,
    Json(payload): Json<UpsertFriendCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FriendCodeService::new(&state.db);

    let friend_code = service
        .upsert(UpsertFriendCodeParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(friend_code.into_dto())))
}

/// Delete a member's friend code for a game.
///
/// # Returns
/// - `204 No Content` - Friend code deleted or absent
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/friend-codes/{user_id}/{game}",
    tag = FRIEND_CODE_TAG,
    params(
        ("user_id" = String, Path, description = "Discord user ID"),
        ("game" = String, Path, description = "Game title")
    ),
    responses(
        (status = 204, description = "Friend code deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_friend_code(
    State(state): State<AppState>,
    Path((user_id, game)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = FriendCodeService::new(&state.db);

    service.delete(user_id, &game).await?;

    Ok(StatusCode::NO_CONTENT)
}
