use super::*;

fn protected_router() -> Router {
    Router::new()
        .route("/api/ping", get(|| async { "pong" }))
        .route_layer(from_fn_with_state(
            Arc::new(credentials()),
            require_basic_auth,
        ))
}

/// Tests that an authenticated request reaches the handler.
///
/// Expected: 200 OK
#[tokio::test]
async fn passes_authenticated_request() {
    let response = protected_router()
        .oneshot(
            Request::builder()
                .uri("/api/ping")
                .header(header::AUTHORIZATION, basic("bot", "s3cret"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests that a request without credentials is challenged.
///
/// Expected: 401 with a Basic WWW-Authenticate challenge
#[tokio::test]
async fn challenges_anonymous_request() {
    let response = protected_router()
        .oneshot(
            Request::builder()
                .uri("/api/ping")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let challenge = response
        .headers()
        .get(header::WWW_AUTHENTICATE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(challenge.starts_with("Basic realm="));
}

/// Tests that wrong credentials are rejected.
///
/// Expected: 401
#[tokio::test]
async fn rejects_wrong_password() {
    let response = protected_router()
        .oneshot(
            Request::builder()
                .uri("/api/ping")
                .header(header::AUTHORIZATION, basic("bot", "nope"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
