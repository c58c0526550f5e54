//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Register the bot's slash commands globally

use serenity::all::{Command, Context, Ready};

use crate::server::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Global command registration overwrites the previous set, so running it on every
/// connection keeps Discord in sync with the commands this build handles.
///
/// # Arguments
/// - `ctx` - Discord context for registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
