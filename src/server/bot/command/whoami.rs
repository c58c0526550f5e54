use serenity::all::CreateCommand;

use crate::server::{
    bot::command::{GENERIC_FAILURE, NOT_LINKED},
    service::backend::ScopedClientFactory,
    state::AppState,
};

pub const NAME: &str = "whoami";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show which game account is linked to you")
}

/// Shows the backend account linked to `identity`.
pub async fn run(state: &AppState, identity: &str) -> String {
    let Some(client) = ScopedClientFactory::from_state(state).get(identity).await else {
        return NOT_LINKED.to_string();
    };

    match client.current_user().await {
        Ok(user) => match user.email {
            Some(email) => format!("Linked to game account `{}` ({}).", user.id, email),
            None => format!("Linked to game account `{}`.", user.id),
        },
        Err(e) => {
            tracing::error!(
                "Failed to fetch backend account {} for Discord user {}: {}",
                client.subject_id(),
                identity,
                e
            );
            GENERIC_FAILURE.to_string()
        }
    }
}
