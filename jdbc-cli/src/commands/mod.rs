//! CLI command implementations.

pub mod build;
pub mod classify;
pub mod dialect;
pub mod parse;
pub mod version;
