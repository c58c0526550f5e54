use chrono::{Duration, Utc};
use oauth2::{AccessToken, RefreshToken};
use test_utils::builder::TestBuilder;

use crate::server::{
    bot::command::{self, GENERIC_FAILURE, NOT_LINKED},
    model::credential::CredentialBundle,
    state::AppState,
};

mod link;

/// Unexpired session for backend subject `u-9` authenticated by `access_token`.
fn session(access_token: &str) -> CredentialBundle {
    CredentialBundle {
        access_token: AccessToken::new(access_token.to_string()),
        refresh_token: RefreshToken::new("r1".to_string()),
        expires_at: Utc::now() + Duration::hours(1),
        subject_id: "u-9".to_string(),
    }
}

#[test]
fn registers_every_command() {
    assert_eq!(command::definitions().len(), 3);
}

/// Tests that an unregistered command name gets a reply instead of an error.
///
/// Expected: "Unknown command." and no session change
#[tokio::test]
async fn unknown_command_is_answered() {
    let test = TestBuilder::new().build().await;
    let state = AppState::for_test(&test.backend_url());
    state.session_store.put("123456789", session("t1")).await;

    let reply = command::run(&state, "ping", "123456789").await;

    assert_eq!(reply, "Unknown command.");
    assert!(state.session_store.contains("123456789").await);
}
