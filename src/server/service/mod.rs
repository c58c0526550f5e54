//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller and bot layers and the remote backend. Services are responsible for:
//!
//! - **Session Cache**: Holding linked credential bundles in memory (`session`)
//! - **Authorization**: Issuing link URLs and exchanging authorization codes (`oauth`)
//! - **Scoped Access**: Building per-call backend clients for linked users (`backend`)

pub mod backend;
pub mod oauth;
pub mod session;
