//! Salvagelink Test Utils
//!
//! Provides shared testing utilities for the account linking bot. The bot talks to a remote
//! backend for three things: issuing authorization URLs, exchanging authorization codes and
//! reading the linked account. This crate stands up a `wiremock` server that plays the role
//! of that backend so tests can drive the real HTTP code paths.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which backend endpoints respond and how
//! - **TestContext**: Running mock backend plus helpers for inspecting received requests
//! - **fixture**: JSON bodies shaped like the backend's responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture::backend::TokenFixture};
//!
//! #[tokio::test]
//! async fn exchanges_code() {
//!     let test = TestBuilder::new()
//!         .with_token_exchange(TokenFixture::default())
//!         .build()
//!         .await;
//!
//!     let backend_url = test.backend_url();
//!     // Point the application at `backend_url`...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod fixture;

/// Backend path that issues Discord-provider authorization URLs.
pub const AUTHORIZE_PATH: &str = "/auth/v1/authorize";

/// Backend path of the OAuth2 token endpoint.
pub const TOKEN_PATH: &str = "/auth/v1/token";

/// Backend path returning the account behind a bearer token.
pub const USER_PATH: &str = "/auth/v1/user";
