//! Friend-code directory: game titles and members' codes per title.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{friend_code::FriendCodeRepository, game_title::GameTitleRepository},
    error::AppError,
    model::friend_code::{FriendCode, FriendCodeFilter, GameTitle, UpsertFriendCodeParam},
};

pub struct FriendCodeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendCodeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_titles(&self) -> Result<Vec<GameTitle>, AppError> {
        let repo = GameTitleRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Adds a game title to the directory.
    ///
    /// # Returns
    /// - `Ok(GameTitle)` - The created title
    /// - `Err(AppError::BadRequest)` - Title is blank or already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_title(&self, title: String) -> Result<GameTitle, AppError> {
        let repo = GameTitleRepository::new(self.db);

        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Game title must not be empty".to_string()));
        }
        if repo.find_by_title(&title).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Game title '{}' already exists",
                title
            )));
        }

        Ok(repo.create(title).await?)
    }

    /// Removes a game title. Friend codes registered for it stay stored but are no
    /// longer listed.
    pub async fn delete_title(&self, title: &str) -> Result<(), AppError> {
        let repo = GameTitleRepository::new(self.db);

        let deleted = repo.delete_by_title(title).await?;
        if deleted == 0 {
            tracing::debug!("Game title '{}' not found, nothing deleted", title);
        }

        Ok(())
    }

    pub async fn list(&self, filter: FriendCodeFilter) -> Result<Vec<FriendCode>, AppError> {
        let repo = FriendCodeRepository::new(self.db);

        repo.list(&filter)
            .await?
            .into_iter()
            .map(FriendCode::from_row)
            .collect()
    }

    /// Registers a member's friend code for a game title, replacing any previous code.
    ///
    /// # Returns
    /// - `Ok(FriendCode)` - The stored entry
    /// - `Err(AppError::NotFound)` - No game title with that name
    /// - `Err(AppError::DbErr)` - Database error, including a concurrent duplicate insert
    pub async fn upsert(&self, param: UpsertFriendCodeParam) -> Result<FriendCode, AppError> {
        let title = GameTitleRepository::new(self.db)
            .find_by_title(&param.game)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game title '{}' not found", param.game)))?;

        let stored = FriendCodeRepository::new(self.db)
            .upsert(param.user_id, title.game_id, param.friend_code)
            .await?;

        Ok(FriendCode {
            user_id: param.user_id,
            game: title.title,
            friend_code: stored.friend_code,
        })
    }

    /// Deletes a member's friend code for a game title.
    ///
    /// An unknown title or a missing entry leaves the store unchanged and is not an error.
    pub async fn delete(&self, user_id: u64, game: &str) -> Result<(), AppError> {
        let Some(title) = GameTitleRepository::new(self.db)
            .find_by_title(game)
            .await?
        else {
            return Ok(());
        };

        FriendCodeRepository::new(self.db)
            .delete(user_id, title.game_id)
            .await?;

        Ok(())
    }
}
