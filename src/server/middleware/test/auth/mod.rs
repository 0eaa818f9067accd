use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use base64::{engine::general_purpose, Engine as _};
use tower::ServiceExt;

use crate::server::{
    config::ApiCredentials,
    error::auth::AuthError,
    middleware::auth::{require_basic_auth, BasicAuthGuard},
};

mod require;
mod require_basic_auth;

fn credentials() -> ApiCredentials {
    ApiCredentials {
        username: "bot".to_string(),
        password: "s3cret".to_string(),
    }
}

fn basic(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        general_purpose::STANDARD.encode(format!("{}:{}", username, password))
    )
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
