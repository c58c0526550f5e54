//! Slash commands for account linking.
//!
//! Each command exposes a `register` builder and a `run` function that turns an invocation
//! into reply text. Keeping `run` free of Discord types lets the commands be tested against
//! a mock backend without a gateway connection.

use serenity::all::CreateCommand;

use crate::server::state::AppState;

pub mod link;
pub mod unlink;
pub mod whoami;

#[cfg(test)]
mod test;

/// Reply for users whose account is not linked or whose session expired.
pub const NOT_LINKED: &str =
    "Your account isn't linked, or your session has expired. Run `/link` to link it.";

/// Generic reply when a backend call fails; the detail only goes to the logs.
pub const GENERIC_FAILURE: &str = "Something went wrong talking to the game server. Please try again later.";

/// All slash commands the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![link::register(), unlink::register(), whoami::register()]
}

/// Runs the command called `name` for the Discord user `identity`.
///
/// # Returns
/// - Reply text to send back to the user
pub async fn run(state: &AppState, name: &str, identity: &str) -> String {
    match name {
        link::NAME => link::run(state, identity).await,
        unlink::NAME => unlink::run(state, identity).await,
        whoami::NAME => whoami::run(state, identity).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            "Unknown command.".to_string()
        }
    }
}
