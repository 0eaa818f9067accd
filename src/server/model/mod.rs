//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer. Domain models
//! are converted from entity models or aggregated query rows at the repository boundary
//! and transformed to DTOs at the controller boundary. Discord snowflakes, stored as
//! strings, are parsed into `u64` during that conversion.

pub mod advent;
pub mod friend_code;
pub mod song;
pub mod stats;
