use super::*;

/// Tests that `/link` replies with the backend-issued authorization URL.
///
/// Expected: reply contains the redirect target
#[tokio::test]
async fn replies_with_authorization_link() {
    let location = "https://discord.com/oauth2/authorize?client_id=1&state=abc";
    let test = TestBuilder::new()
        .with_authorize_redirect(location)
        .build()
        .await;
    let state = AppState::for_test(&test.backend_url());

    let reply = command::run(&state, "link", "123456789").await;

    assert!(reply.contains(location));
}

/// Tests that a backend refusing to issue a link produces a generic reply.
///
/// Expected: generic failure text, no backend detail leaked
#[tokio::test]
async fn backend_failure_is_reported_generically() {
    let test = TestBuilder::new().with_authorize_status(500).build().await;
    let state = AppState::for_test(&test.backend_url());

    let reply = command::run(&state, "link", "123456789").await;

    assert_eq!(reply, GENERIC_FAILURE);
}
