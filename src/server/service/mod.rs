//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Lookups**: Resolving names (game titles, catalog games) to IDs before writes and searches
//! - **Orchestration**: Combining repository calls, such as batching game-name lookups per page
//! - **Domain Models**: Converting repository rows into domain models and ranking aggregates
//! - **Error Policy**: Deciding which misses are errors (unknown title on upsert) and which are not

pub mod advent;
pub mod friend_code;
pub mod song;
pub mod stats;
