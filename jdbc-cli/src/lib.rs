//! jdbc-codec CLI - Command-line interface for the JDBC URL codec.
//!
//! This crate provides the `jdbc-codec` tool for parsing and rebuilding
//! connection URLs and for managing custom dialect records.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
