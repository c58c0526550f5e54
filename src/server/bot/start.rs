use serenity::all::{Client, GatewayIntents};

use crate::server::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord bot client.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Application state shared with the HTTP server
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Invalid token or client construction failure
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// This function should be called from within a tokio::spawn task since it will block
/// until the bot shuts down.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(client: &mut Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
