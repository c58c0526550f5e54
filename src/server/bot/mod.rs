//! Discord bot integration for account linking.
//!
//! This module provides the Discord side of the application: the slash commands users run
//! to link, inspect, and unlink their backend account. The bot shares the application
//! state with the HTTP server, so a session stored by the OAuth callback is immediately
//! visible to the next command.
//!
//! The bot is initialized during startup and runs in a separate tokio task to avoid
//! blocking the HTTP server.
//!
//! # Gateway Intents
//!
//! Slash commands arrive as interactions, which need no privileged intents. The bot only
//! requests `GUILDS`.

pub mod command;
pub mod handler;
pub mod start;
