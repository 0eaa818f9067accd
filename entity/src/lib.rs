//! SeaORM entity models for every table owned by the service.

pub mod prelude;

pub mod advent;
pub mod chart;
pub mod emoji_log;
pub mod friend_code;
pub mod friend_code_game;
pub mod game;
pub mod message_log;
pub mod song;
