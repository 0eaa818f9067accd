//! Song catalog search and random song selection.

use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, IsolationLevel, TransactionTrait};

use crate::server::{
    data::{game::GameRepository, song::SongRepository},
    error::AppError,
    model::song::{Game, Song, SongFilter, SongSearchParams},
};

pub struct SongService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SongService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_games(&self) -> Result<Vec<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Searches the catalog with every present filter combined.
    ///
    /// A game name that matches no catalog game yields an empty result rather than an
    /// error.
    ///
    /// # Returns
    /// - `Ok(Vec<Song>)` - Matching songs in song ID order with charts and game names
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::JsonErr)` - Aggregated chart column could not be decoded
    pub async fn search(&self, filter: SongFilter) -> Result<Vec<Song>, AppError> {
        let params = self.resolve_filter(filter).await?;

        let rows = SongRepository::new(self.db).search(&params).await?;
        let songs = rows
            .into_iter()
            .map(Song::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        self.attach_game_names(songs).await
    }

    /// Picks one song uniformly at random among those matching `game` and `level`.
    ///
    /// The match count and the drawn row are read in one repeatable-read transaction,
    /// so a concurrent delete cannot turn a match into `None`.
    ///
    /// # Arguments
    /// - `game` - Optional catalog game name
    /// - `level` - Optional chart level; applies with or without `game`
    /// - `rng` - Random source used to draw the position
    ///
    /// # Returns
    /// - `Ok(Some(Song))` - A matching song
    /// - `Ok(None)` - No song matches
    /// - `Err(AppError)` - Database or chart decoding error
    pub async fn random<R>(
        &self,
        game: Option<String>,
        level: Option<String>,
        rng: &mut R,
    ) -> Result<Option<Song>, AppError>
    where
        R: Rng,
    {
        let filter = SongFilter {
            game,
            level,
            ..Default::default()
        };
        let params = self.resolve_filter(filter).await?;

        // SQLite transactions are already serializable and take no isolation level.
        let isolation = match self.db.get_database_backend() {
            DbBackend::Sqlite => None,
            _ => Some(IsolationLevel::RepeatableRead),
        };
        let txn = self.db.begin_with_config(isolation, None).await?;
        let repo = SongRepository::new(&txn);

        let count = repo.count(&params).await?;
        let row = if count == 0 {
            None
        } else {
            repo.nth(&params, rng.random_range(0..count)).await?
        };
        txn.commit().await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let song = Song::from_row(row)?;
        let mut songs = self.attach_game_names(vec![song]).await?;

        Ok(songs.pop())
    }

    /// Resolves the game name filter to a catalog game ID.
    async fn resolve_filter(&self, filter: SongFilter) -> Result<SongSearchParams, AppError> {
        let game_id = match filter.game.as_deref() {
            Some(name) => Some(GameRepository::new(self.db).find_id_by_name(name).await?),
            None => None,
        };

        Ok(SongSearchParams::from_filter(filter, game_id))
    }

    /// Fills in game names with a single lookup for the whole page.
    async fn attach_game_names(&self, mut songs: Vec<Song>) -> Result<Vec<Song>, AppError> {
        let mut game_ids: Vec<i32> = songs.iter().map(|song| song.game_id).collect();
        game_ids.sort_unstable();
        game_ids.dedup();

        let names = GameRepository::new(self.db).names_by_ids(game_ids).await?;
        for song in &mut songs {
            song.game = names.get(&song.game_id).cloned();
        }

        Ok(songs)
    }
}
