use super::*;

/// Tests that matching credentials pass the guard.
///
/// Expected: Ok(())
#[test]
fn accepts_matching_credentials() {
    let credentials = credentials();
    let guard = BasicAuthGuard::new(&credentials);

    let result = guard.require(&headers_with(&basic("bot", "s3cret")));

    assert!(result.is_ok());
}

/// Tests that a password containing colons is kept whole.
///
/// Expected: Ok(()) since only the first colon separates username and password
#[test]
fn password_may_contain_colons() {
    let credentials = ApiCredentials {
        username: "bot".to_string(),
        password: "a:b:c".to_string(),
    };
    let guard = BasicAuthGuard::new(&credentials);

    assert!(guard.require(&headers_with(&basic("bot", "a:b:c"))).is_ok());
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(MissingCredentials)
#[test]
fn rejects_missing_header() {
    let credentials = credentials();
    let guard = BasicAuthGuard::new(&credentials);

    let result = guard.require(&HeaderMap::new());

    assert!(matches!(result, Err(AuthError::MissingCredentials)));
}

/// Tests wrong username and wrong password separately.
///
/// Expected: Err(InvalidCredentials) for both
#[test]
fn rejects_wrong_username_or_password() {
    let credentials = credentials();
    let guard = BasicAuthGuard::new(&credentials);

    let wrong_user = guard.require(&headers_with(&basic("admin", "s3cret")));
    let wrong_password = guard.require(&headers_with(&basic("bot", "s3cret!")));

    assert!(matches!(wrong_user, Err(AuthError::InvalidCredentials)));
    assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
}

/// Tests header values that are not Basic credentials.
///
/// Expected: Err(MalformedCredentials) for each
#[test]
fn rejects_malformed_headers() {
    let credentials = credentials();
    let guard = BasicAuthGuard::new(&credentials);
    let no_separator = format!("Basic {}", general_purpose::STANDARD.encode("bots3cret"));

    for value in ["Bearer abc", "Basic not-base64!", "Basic", no_separator.as_str()] {
        let result = guard.require(&headers_with(value));

        assert!(
            matches!(result, Err(AuthError::MalformedCredentials)),
            "expected malformed for {value}"
        );
    }
}
