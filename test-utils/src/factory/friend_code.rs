//! Friend code factories for creating game titles and friend codes.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a friend code game title named `"Title {id}"`.
pub async fn create_game_title(
    db: &DatabaseConnection,
) -> Result<entity::friend_code_game::Model, DbErr> {
    create_game_title_named(db, format!("Title {}", next_id())).await
}

/// Creates a friend code game title with a specific name.
pub async fn create_game_title_named(
    db: &DatabaseConnection,
    title: impl Into<String>,
) -> Result<entity::friend_code_game::Model, DbErr> {
    entity::friend_code_game::ActiveModel {
        game_id: ActiveValue::NotSet,
        title: ActiveValue::Set(title.into()),
    }
    .insert(db)
    .await
}

/// Creates a friend code for a user and game title ID.
///
/// The code defaults to `"SW-{id}"`.
pub async fn create_friend_code(
    db: &DatabaseConnection,
    user_id: &str,
    game_id: i32,
) -> Result<entity::friend_code::Model, DbErr> {
    entity::friend_code::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id.to_string()),
        game_id: ActiveValue::Set(game_id),
        friend_code: ActiveValue::Set(format!("SW-{:04}", next_id())),
    }
    .insert(db)
    .await
}
