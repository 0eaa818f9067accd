//! Request and response DTOs serialized at the HTTP boundary.

pub mod advent;
pub mod api;
pub mod friend_code;
pub mod song;
pub mod stats;
