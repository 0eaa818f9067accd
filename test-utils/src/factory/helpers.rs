//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game, one song of that game and one chart per given level.
///
/// # Arguments
/// - `db` - Database connection
/// - `levels` - Level label of each chart to create, in insertion order
///
/// # Returns
/// - `Ok((game, song, charts))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_song_with_charts(
    db: &DatabaseConnection,
    levels: &[&str],
) -> Result<
    (
        entity::game::Model,
        entity::song::Model,
        Vec<entity::chart::Model>,
    ),
    DbErr,
> {
    let game = crate::factory::catalog::create_game(db).await?;
    let song = crate::factory::catalog::create_song(db, game.game_id).await?;

    let mut charts = Vec::with_capacity(levels.len());
    for level in levels {
        let chart = crate::factory::catalog::ChartFactory::new(db, song.song_id)
            .level(*level)
            .build()
            .await?;
        charts.push(chart);
    }

    Ok((game, song, charts))
}

/// Creates a friend code game title and a friend code for it.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord user ID owning the friend code
///
/// # Returns
/// - `Ok((game_title, friend_code))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_friend_code_with_title(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<(entity::friend_code_game::Model, entity::friend_code::Model), DbErr> {
    let title = crate::factory::friend_code::create_game_title(db).await?;
    let code = crate::factory::friend_code::create_friend_code(db, user_id, title.game_id).await?;

    Ok((title, code))
}
