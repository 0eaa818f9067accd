use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::ApiCredentials,
    controller::{advent, friend_code, song, stats},
    middleware::auth::require_basic_auth,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    modifiers(&Security),
    security(("BasicAuth" = [])),
    info(
        title = "otogame-api",
        description = "Community statistics, friend codes, advent calendar and song catalog"
    ),
    paths(
        stats::get_emoji_stats,
        stats::get_emoji_ranking,
        stats::get_emoji_members,
        stats::create_message_log,
        stats::get_daily_messages,
        friend_code::get_game_titles,
        friend_code::create_game_title,
        friend_code::delete_game_title,
        friend_code::get_friend_codes,
        friend_code::upsert_friend_code,
        friend_code::delete_friend_code,
        advent::get_advent_entries,
        advent::get_advent_entry,
        advent::upsert_advent,
        advent::delete_advent,
        song::search_songs,
        song::random_song,
        song::get_games,
    ),
    tags(
        (name = "stats", description = "Emoji and message statistics"),
        (name = "friend_code", description = "Game titles and friend codes"),
        (name = "advent", description = "Advent calendar entries"),
        (name = "song", description = "Song catalog"),
    )
)]
pub struct ApiDoc;

struct Security;

impl Modify for Security {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            let scheme = HttpBuilder::new().scheme(HttpAuthScheme::Basic).build();

            components.add_security_scheme("BasicAuth", SecurityScheme::Http(scheme))
        }
    }
}

/// Builds every API route behind Basic auth, plus the unauthenticated API docs.
pub fn router(credentials: Arc<ApiCredentials>) -> Router<AppState> {
    let api = Router::new()
        .route("/emoji-stats", get(stats::get_emoji_stats))
        .route("/api/guilds/{guild_id}/emojis", get(stats::get_emoji_ranking))
        .route(
            "/api/guilds/{guild_id}/emojis/members",
            get(stats::get_emoji_members),
        )
        .route(
            "/api/guilds/{guild_id}/messages",
            post(stats::create_message_log),
        )
        .route(
            "/api/guilds/{guild_id}/messages/{user_id}",
            get(stats::get_daily_messages),
        )
        .route(
            "/api/friend-codes/games",
            get(friend_code::get_game_titles).post(friend_code::create_game_title),
        )
        .route(
            "/api/friend-codes/games/{title}",
            delete(friend_code::delete_game_title),
        )
        .route(
            "/api/friend-codes",
            get(friend_code::get_friend_codes).put(friend_code::upsert_friend_code),
        )
        .route(
            "/api/friend-codes/{user_id}/{game}",
            delete(friend_code::delete_friend_code),
        )
        .route(
            "/api/advent",
            get(advent::get_advent_entries).put(advent::upsert_advent),
        )
        .route(
            "/api/advent/{user_id}/{date}",
            get(advent::get_advent_entry).delete(advent::delete_advent),
        )
        .route("/api/songs", get(song::search_songs))
        .route("/api/songs/random", get(song::random_song))
        .route("/api/games", get(song::get_games))
        .route_layer(middleware::from_fn_with_state(
            credentials,
            require_basic_auth,
        ));

    api.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
