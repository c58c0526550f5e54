//! Response bodies for the mock backend.

pub mod backend;
