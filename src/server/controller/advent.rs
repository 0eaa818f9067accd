use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::{
    model::{
        advent::{AdventEntryDto, AdventEntryListDto, UpsertAdventDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        model::advent::{AdventEntry, UpsertAdventParam},
        service::advent::AdventService,
        state::AppState,
        util::parse::parse_date,
    },
};

/// Tag for grouping advent calendar endpoints in OpenAPI documentation
pub static ADVENT_TAG: &str = "advent";

#[derive(Deserialize)]
pub struct YearQuery {
    pub year: Option<i32>,
}

fn into_list(entries: Vec<AdventEntry>) -> AdventEntryListDto {
    let entries: Vec<AdventEntryDto> = entries.into_iter().map(AdventEntry::into_dto).collect();

    AdventEntryListDto {
        total: entries.len() as u64,
        entries,
    }
}

/// List a year's advent calendar entries.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Calendar year, defaulting to the current UTC year
///
/// # Returns
/// - `200 OK` - Entries ordered by date
/// - `400 Bad Request` - Year outside the supported range
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/advent",
    tag = ADVENT_TAG,
    params(
        ("year" = Option<i32>, Query, description = "Calendar year (default: current year)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved entries", body = AdventEntryListDto),
        (status = 400, description = "Invalid year", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_advent_entries(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdventService::new(&state.db);

    let year = query.year.unwrap_or_else(|| Utc::now().year());
    let entries = service.get_year(year).await?;

    Ok((StatusCode::OK, Json(into_list(entries))))
}

/// Get a member's entries for one date.
///
/// # Returns
/// - `200 OK` - Entries, possibly empty
/// - `400 Bad Request` - Date is not `YYYY-MM-DD`
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/advent/{user_id}/{date}",
    tag = ADVENT_TAG,
    params(
        ("user_id" = String, Path, description = "Discord user ID"),
        ("date" = String, Path, description = "Entry date as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Successfully retrieved entries", body = AdventEntryListDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_advent_entry(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdventService::new(&state.db);

    let date = parse_date(&date)?;
    let entries = service.get(user_id, date).await?;

    Ok((StatusCode::OK, Json(into_list(entries))))
}

/// Create or replace a member's entry for a date.
///
/// Missing `title` and `url` are stored as empty strings.
///
/// # Returns
/// - `200 OK` - Stored entry
/// - `400 Bad Request` - Date is not `YYYY-MM-DD`
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/advent",
    tag = ADVENT_TAG,
    request_body = UpsertAdventDto,
    responses(
        (status = 200, description = "Successfully stored entry", body = AdventEntryDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_advent(
    State(state): State<AppState>,
    Json(payload): Json<UpsertAdventDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdventService::new(&state.db);

    let entry = service.upsert(UpsertAdventParam::from_dto(payload)?).await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Delete a member's entry for a date.
///
/// # Returns
/// - `204 No Content` - Entry deleted or absent
/// - `400 Bad Request` - Date is not `YYYY-MM-DD`
/// - `401 Unauthorized` - Missing or invalid Basic credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/advent/{user_id}/{date}",
    tag = ADVENT_TAG,
    params(
        ("user_id" = String, Path, description = "Discord user ID"),
        ("date" = String, Path, description = "Entry date as YYYY-MM-DD")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_advent(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdventService::new(&state.db);

    let date = parse_date(&date)?;
    service.delete(user_id, date).await?;

    Ok(StatusCode::NO_CONTENT)
}
