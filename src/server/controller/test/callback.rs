use axum::http::{header, StatusCode};
use chrono::{Duration, Utc};
use serde_json::json;
use test_utils::{builder::TestBuilder, fixture::backend::TokenFixture, TOKEN_PATH};

use super::*;

/// Tests a successful callback.
///
/// Verifies that a valid code and state are exchanged, the bundle is stored under the
/// state's identity with expiry one hour out, and the browser is redirected to the
/// success page.
///
/// Expected: 302 to the success URL with one session stored
#[tokio::test]
async fn stores_session_and_redirects() {
    let test = TestBuilder::new()
        .with_token_exchange(TokenFixture::new("t1", "r1", 3600, "u-9"))
        .build()
        .await;
    let state = AppState::for_test(&test.backend_url());

    let before = Utc::now();
    let response = get(&state, "/api/auth/callback?code=abc&state=discordUser123").await;
    let after = Utc::now();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        state.link_success_url.as_str()
    );

    let bundle = state.session_store.get("discordUser123").await.unwrap();
    assert_eq!(bundle.access_token.secret(), "t1");
    assert_eq!(bundle.refresh_token.secret(), "r1");
    assert_eq!(bundle.subject_id, "u-9");
    assert!(bundle.expires_at >= before + Duration::milliseconds(3_599_999));
    assert!(bundle.expires_at <= after + Duration::milliseconds(3_600_000));

    assert_eq!(test.requests_to(TOKEN_PATH).await, 1);
}

/// Tests that the redirect carries no secrets.
///
/// Expected: Location header is exactly the configured URL, no token in it
#[tokio::test]
async fn redirect_contains_no_tokens() {
    let test = TestBuilder::new()
        .with_token_exchange(TokenFixture::new("secret-access", "secret-refresh", 3600, "u-9"))
        .build()
        .await;
    let state = AppState::for_test(&test.backend_url());

    let response = get(&state, "/api/auth/callback?code=abc&state=123456789").await;

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(!location.contains("secret-access"));
    assert!(!location.contains("secret-refresh"));
    assert!(body_text(response).await.is_empty());
}

/// Tests a callback where the provider reports an error.
///
/// Verifies that the provider's error text is surfaced and no exchange is attempted even
/// though a code and state are present.
///
/// Expected: 400 containing "access_denied", no token request, no session
#[tokio::test]
async fn provider_error_is_denied() {
    let test = TestBuilder::new()
        .with_token_exchange(TokenFixture::default())
        .build()
        .await;
    let state = AppState::for_test(&test.backend_url());

    let response = get(
        &state,
        "/api/auth/callback?error=access_denied&code=abc&state=123456789",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("access_denied"));
    assert_eq!(test.requests_to(TOKEN_PATH).await, 0);
    assert!(!state.session_store.contains("123456789").await);
}

/// Tests that a provider error without any other parameter is still reported.
///
/// Expected: 400 containing the error and its description
#[tokio::test]
async fn provider_error_alone_is_denied() {
    let test = TestBuilder::new().build().await;
    let state = AppState::for_test(&test.backend_url());

    let response = get(
        &state,
        "/api/auth/callback?error=access_denied&error_description=The+user+denied+the+request",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("access_denied"));
    assert!(body.contains("The user denied the request"));
}

/// Tests a callback without an authorization code.
///
/// Expected: 400 citing the missing code, no session for the state's identity
#[tokio::test]
async fn missing_code_is_rejected() {
    let test = TestBuilder::new()
        .with_token_exchange(TokenFixture::default())
        .build()
        .await;
    let state = AppState::for_test(&test.backend_url());

    let response = get(&state, "/api/auth/callback?state=u1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Missing authorization code"));
    assert_eq!(test.requests_to(TOKEN_PATH).await, 0);
    assert!(!state.session_store.contains("u1").await);
}

/// Tests that an empty code counts as missing.
///
/// Expected: 400 citing the missing code
#[tokio::test]
async fn empty_code_is_rejected() {
    let test = TestBuilder::new().build().await;
    let state = AppState::for_test(&test.backend_url());

    let response = get(&state, "/api/auth/callback?code=&state=u1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Missing authorization code"));
}

/// Tests a callback without state.
///
/// Expected: 400 citing the missing state, no exchange
#[tokio::test]
async fn missing_state_is_rejected() {
    let test = TestBuilder::new()
        .with_token_exchange(TokenFixture::default())
        .build()
        .await;
    let state = AppState::for_test(&test.backend_url());

    let response = get(&state, "/api/auth/callback?code=abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Missing state"));
    assert_eq!(test.requests_to(TOKEN_PATH).await, 0);
}

/// Tests a callback whose state does not look like an identity.
///
/// Expected: 400 citing the invalid state, no exchange
#[tokio::test]
async fn malformed_state_is_rejected() {
    let test = TestBuilder::new()
        .with_token_exchange(TokenFixture::default())
        .build()
        .await;
    let state = AppState::for_test(&test.backend_url());

    let response = get(&state, "/api/auth/callback?code=abc&state=..%2Fadmin").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Invalid state"));
    assert_eq!(test.requests_to(TOKEN_PATH).await, 0);
}

/// Tests a callback whose code the backend rejects.
///
/// Expected: 400 with the provider's error code, no session
#[tokio::test]
async fn rejected_code_fails_exchange() {
    let test = TestBuilder::new()
        .with_token_error(400, "invalid_grant", "Authorization code expired")
        .build()
        .await;
    let state = AppState::for_test(&test.backend_url());

    let response = get(&state, "/api/auth/callback?code=expired&state=123456789").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("Code exchange failed"));
    assert!(body.contains("invalid_grant"));
    assert!(!state.session_store.contains("123456789").await);
}

/// Tests replaying an authorization code that was already exchanged.
///
/// Verifies that the backend's single-use enforcement surfaces as an exchange failure and
/// the session written by the first callback is left untouched.
///
/// Expected: 302 then 400, session still holds the first exchange's tokens
#[tokio::test]
async fn replayed_code_fails_exchange() {
    let test = TestBuilder::new()
        .with_single_use_code(TokenFixture::new("t1", "r1", 3600, "u-9"))
        .build()
        .await;
    let state = AppState::for_test(&test.backend_url());

    let first = get(&state, "/api/auth/callback?code=abc&state=123456789").await;
    assert_eq!(first.status(), StatusCode::FOUND);

    let original_expiry = state
        .session_store
        .get("123456789")
        .await
        .unwrap()
        .expires_at;

    let replay = get(&state, "/api/auth/callback?code=abc&state=123456789").await;
    assert_eq!(replay.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(replay).await.contains("invalid_grant"));

    let bundle = state.session_store.get("123456789").await.unwrap();
    assert_eq!(bundle.access_token.secret(), "t1");
    assert_eq!(bundle.expires_at, original_expiry);
    assert_eq!(test.requests_to(TOKEN_PATH).await, 2);
}

/// Tests an exchange response that parses but carries no backend user.
///
/// Expected: 400 exchange failure, no session
#[tokio::test]
async fn session_without_user_fails_exchange() {
    let test = TestBuilder::new()
        .with_token_body(json!({
            "access_token": "t1",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r1"
        }))
        .build()
        .await;
    let state = AppState::for_test(&test.backend_url());

    let response = get(&state, "/api/auth/callback?code=abc&state=123456789").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Code exchange failed"));
    assert!(!state.session_store.contains("123456789").await);
}

/// Tests a backend that does not serve the token endpoint at all.
///
/// Expected: 400 exchange failure rather than a raw transport error
#[tokio::test]
async fn unavailable_token_endpoint_fails_exchange() {
    let test = TestBuilder::new().build().await;
    let state = AppState::for_test(&test.backend_url());

    let response = get(&state, "/api/auth/callback?code=abc&state=123456789").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Code exchange failed"));
    assert!(!state.session_store.contains("123456789").await);
}
