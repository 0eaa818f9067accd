//! HTTP handlers.
//!
//! Handlers extract request data, delegate to a service and map the result to a DTO.
//! Each module carries the `#[utoipa::path]` annotations that `router::ApiDoc` collects.

pub mod advent;
pub mod friend_code;
pub mod song;
pub mod stats;
