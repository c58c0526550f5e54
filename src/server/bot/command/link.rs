use serenity::all::CreateCommand;

use crate::server::{
    bot::command::GENERIC_FAILURE, service::oauth::BackendAuthService, state::AppState,
};

pub const NAME: &str = "link";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Link your Discord account to your game account")
}

/// Replies with an authorization link bound to `identity`.
///
/// Running the command again issues a fresh link; earlier links stay usable until the
/// backend expires them.
pub async fn run(state: &AppState, identity: &str) -> String {
    let auth_service = BackendAuthService::from_state(state);

    match auth_service.link_url(identity).await {
        Ok(url) => format!(
            "[Click here to link your account]({}). Once you have signed in, your data is \
             available to commands for as long as your session lasts.",
            url
        ),
        Err(e) => {
            tracing::error!("Failed to create link for Discord user {}: {}", identity, e);
            GENERIC_FAILURE.to_string()
        }
    }
}
