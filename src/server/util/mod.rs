//! Small parsing and URL helpers shared across layers.

pub mod endpoint;
pub mod parse;
