use serenity::all::CreateCommand;

use crate::server::state::AppState;

pub const NAME: &str = "unlink";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Forget the game account session linked to you")
}

/// Deletes the session for `identity`. Succeeds whether or not one existed.
pub async fn run(state: &AppState, identity: &str) -> String {
    state.session_store.delete(identity).await;

    tracing::info!("Unlinked Discord user {}", identity);

    "Your account has been unlinked. Run `/link` to link it again.".to_string()
}
