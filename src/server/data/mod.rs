//! Database repository layer.
//!
//! Each repository borrows a pooled `DatabaseConnection` and performs one logical
//! operation per call. Point reads and writes go through SeaORM entities; aggregates,
//! joins and searches with optional filters are written as SQL through
//! [`query::QueryBuilder`], which binds every value positionally for the connection's
//! backend. Repositories return `DbErr` and leave error mapping to the service layer.

pub mod advent;
pub mod dialect;
pub mod emoji;
pub mod friend_code;
pub mod game;
pub mod game_title;
pub mod message;
pub mod query;
pub mod song;

#[cfg(test)]
mod test;
