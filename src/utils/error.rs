//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Malformed lines and tokens inside a trace run are deliberately not errors:
//! the parser skips them and keeps going. Only a run with zero responsive
//! hops, or an aggregation with zero usable runs, surfaces here.

use thiserror::Error;

/// Errors that can occur while parsing one trace run
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("trace run produced no responsive hops")]
    EmptyRun,
}

/// Errors that can occur during multi-run aggregation
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("no usable trace runs to aggregate")]
    NoData,
}

/// Errors that can occur while capturing or loading trace runs
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("failed to launch {binary}: {source}")]
    Launch {
        binary: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("no capture files (*.{extension}) found in {directory}")]
    NoCaptures {
        directory: String,
        extension: &'static str,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no hops to chart")]
    EmptyHops,
}
