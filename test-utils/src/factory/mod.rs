//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories for child rows take the parent's key as an
//! argument, and `helpers` offers shortcuts that create a parent together with its children.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let game = factory::catalog::create_game(&db).await?;
//!     let song = factory::catalog::create_song(&db, game.game_id).await?;
//!
//!     // Create a song with a set of charts in one call
//!     let (game, song, charts) =
//!         factory::helpers::create_song_with_charts(&db, &["12", "13+"]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let song = factory::catalog::SongFactory::new(&db, game.game_id)
//!     .title("Love Song")
//!     .artist("Someone")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `catalog` - Create game, song and chart entities
//! - `friend_code` - Create friend code game titles and friend codes
//! - `advent` - Create advent calendar entries
//! - `stats` - Create emoji and message log records
//! - `helpers` - ID generation and entities with their dependencies

pub mod advent;
pub mod catalog;
pub mod friend_code;
pub mod helpers;
pub mod stats;

// Re-export commonly used factory functions for concise usage
pub use advent::create_advent;
pub use catalog::{create_chart, create_game, create_song};
pub use friend_code::{create_friend_code, create_game_title};
pub use stats::{create_emoji_log, create_message_log};
