//! Account linking backend and Discord bot.
//!
//! This module contains everything the process runs: the HTTP endpoint that terminates the
//! OAuth handoff, the Discord bot that starts it, and the in-memory session cache both of
//! them share. The backend uses Axum as the web framework, `oauth2` and `reqwest` for the
//! remote backend, and Serenity for the Discord bot.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and request validation
//! - **Service Layer** (`service/`) - Session cache, backend authorization and scoped clients
//! - **Model Layer** (`model/`) - Credential bundles and backend payloads
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Bot** (`bot/`) - Discord event handlers and slash commands
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (HTTP clients, session cache, URLs)
//! - **Startup** (`startup`) - Initialization of logging and clients
//! - **Router** (`router`) - Axum route configuration
//!
//! # Linking Flow
//!
//! 1. **Bot** receives `/link` and asks the backend for an authorization URL
//! 2. User authorizes out-of-band; the backend redirects to the callback
//! 3. **Controller** validates the callback and asks the service to exchange the code
//! 4. **Service** stores the resulting credential bundle keyed by Discord user ID
//! 5. Later commands obtain a scoped backend client for that Discord user

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
