use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose, Engine as _};
use subtle::ConstantTimeEq;

use crate::server::{config::ApiCredentials, error::auth::AuthError};

/// Checks HTTP Basic credentials against the configured API credentials.
pub struct BasicAuthGuard<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> BasicAuthGuard<'a> {
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Requires the request headers to carry the configured username and password.
    ///
    /// Username and password are both compared in constant time and both comparisons
    /// always run, so timing does not reveal which one differs.
    ///
    /// # Returns
    /// - `Ok(())` - Credentials match
    /// - `Err(AuthError::MissingCredentials)` - No `Authorization` header
    /// - `Err(AuthError::MalformedCredentials)` - Header is not a decodable Basic credential
    /// - `Err(AuthError::InvalidCredentials)` - Username or password differs
    pub fn require(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let header = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingCredentials)?;

        let (username, password) = decode_basic(header.as_bytes())?;

        let username_ok = username
            .as_bytes()
            .ct_eq(self.credentials.username.as_bytes());
        let password_ok = password
            .as_bytes()
            .ct_eq(self.credentials.password.as_bytes());

        if bool::from(username_ok & password_ok) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Splits a `Basic <base64(user:password)>` header value into its two parts.
fn decode_basic(value: &[u8]) -> Result<(String, String), AuthError> {
    let value = std::str::from_utf8(value).map_err(|_| AuthError::MalformedCredentials)?;
    let (scheme, encoded) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedCredentials)?;

    if !scheme.eq_ignore_ascii_case("Basic") {
        return Err(AuthError::MalformedCredentials);
    }

    let decoded = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthError::MalformedCredentials)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedCredentials)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(AuthError::MalformedCredentials)?;

    Ok((username.to_string(), password.to_string()))
}

/// Axum middleware rejecting requests without valid Basic credentials.
///
/// Rejected requests get 401 with a `WWW-Authenticate` challenge and never reach a
/// handler.
pub async fn require_basic_auth(
    State(credentials): State<Arc<ApiCredentials>>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    BasicAuthGuard::new(&credentials).require(request.headers())?;

    Ok(next.run(request).await)
}
