//! Friend-code directory domain models and parameters.

use crate::{
    model::friend_code::{FriendCodeDto, UpsertFriendCodeDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Game a friend code can be registered for.
#[derive(Debug, Clone, PartialEq)]
pub struct GameTitle {
    pub game_id: i32,
    pub title: String,
}

impl GameTitle {
    pub fn from_entity(entity: entity::friend_code_game::Model) -> Self {
        Self {
            game_id: entity.game_id,
            title: entity.title,
        }
    }
}

/// A member's friend code for one game, joined with the game's title.
#[derive(Debug, Clone, PartialEq)]
pub struct FriendCode {
    pub user_id: u64,
    pub game: String,
    pub friend_code: String,
}

impl FriendCode {
    /// Converts a joined row at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(FriendCode)` - Converted entry
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user ID is not numeric
    pub fn from_row(row: FriendCodeRow) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(row.user_id)?,
            game: row.game,
            friend_code: row.friend_code,
        })
    }

    pub fn into_dto(self) -> FriendCodeDto {
        FriendCodeDto {
            user_id: self.user_id,
            game: self.game,
            friend_code: self.friend_code,
        }
    }
}

/// Row of the friend code / game title join.
#[derive(Debug, Clone, sea_orm::FromQueryResult)]
pub struct FriendCodeRow {
    pub user_id: String,
    pub game: String,
    pub friend_code: String,
}

/// Optional filters for listing friend codes; both absent lists every entry.
#[derive(Debug, Clone, Default)]
pub struct FriendCodeFilter {
    pub user_id: Option<u64>,
    pub game: Option<String>,
}

/// Parameters for registering or replacing a member's friend code for a game.
#[derive(Debug, Clone)]
pub struct UpsertFriendCodeParam {
    pub user_id: u64,
    /// Title of the game, resolved to its ID before writing.
    pub game: String,
    pub friend_code: String,
}

impl UpsertFriendCodeParam {
    pub fn from_dto(dto: UpsertFriendCodeDto) -> Self {
        Self {
            user_id: dto.user_id,
            game: dto.game,
            friend_code: dto.friend_code,
        }
    }
}
