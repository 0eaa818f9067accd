use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Realm announced in the `WWW-Authenticate` challenge.
pub const AUTH_REALM: &str = "otogame-api";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `Authorization` header.
    #[error("Request has no Authorization header")]
    MissingCredentials,

    /// `Authorization` header is not a well-formed `Basic` credential.
    ///
    /// Covers a non-Basic scheme, invalid base64, non UTF-8 content and a decoded
    /// value without the `user:password` separator.
    #[error("Authorization header is not valid Basic credentials")]
    MalformedCredentials,

    /// Username or password does not match the configured API credentials.
    #[error("Basic credentials do not match")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized with a `WWW-Authenticate: Basic` challenge and
/// the same client-facing message, so callers cannot tell which part of the credential
/// was wrong. The specific reason is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            [(
                header::WWW_AUTHENTICATE,
                format!("Basic realm=\"{}\"", AUTH_REALM),
            )],
            Json(ErrorDto {
                error: "Access denied".to_string(),
            }),
        )
            .into_response()
    }
}
