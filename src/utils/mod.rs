//! Shared utilities: configuration, error types, numeric helpers.

pub mod config;
pub mod error;
pub mod stats;
