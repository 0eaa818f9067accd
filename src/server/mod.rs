//! HTTP API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database access. Two stores
//! are involved: the main store holding community data and the song catalog store, which
//! may be the same database.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations, hand-written SQL and row decoding
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Basic authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pools, credentials)
//! - **Startup** (`startup`) - Database connections, migrations and CORS
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** checks Basic credentials
//! 3. **Controller** converts query, path and body data to params, calls the service
//! 4. **Service** executes business logic and orchestrates data operations
//! 5. **Data** queries the database and converts rows to domain models
//! 6. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
