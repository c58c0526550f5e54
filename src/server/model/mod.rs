//! Server-side domain models.
//!
//! This module contains the credential bundle held by the session cache and the payloads
//! exchanged with the remote backend. Backend payloads are converted to domain models at
//! the service boundary so the rest of the application never handles raw token responses.

pub mod backend;
pub mod credential;
