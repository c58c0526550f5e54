//! HTTP request handlers.
//!
//! The only HTTP surface is the OAuth callback that completes account linking; everything
//! else users do happens through Discord slash commands.

pub mod auth;

#[cfg(test)]
mod test;
