use serenity::all::{CommandInteraction, Context, EditInteractionResponse, Interaction};

use crate::server::{bot::command, state::AppState};

/// Handle a slash command invocation.
///
/// Replies are deferred first since commands call the backend, which can take longer than
/// Discord's initial response window. All replies are ephemeral: they contain account
/// links and account details meant only for the invoking user.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!(
            "Failed to defer /{} for user {}: {:?}",
            command.data.name,
            command.user.id,
            e
        );
        return;
    }

    let content = run_command(state, &command).await;

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        tracing::error!(
            "Failed to reply to /{} for user {}: {:?}",
            command.data.name,
            command.user.id,
            e
        );
    }
}

async fn run_command(state: &AppState, command: &CommandInteraction) -> String {
    let identity = command.user.id.to_string();

    tracing::debug!("/{} invoked by {}", command.data.name, identity);

    command::run(state, &command.data.name, &identity).await
}
