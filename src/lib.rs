//! Sextant - a project metrics library for AI agents and humans.
//!
//! This library provides the core functionality for the `sx` CLI tool:
//! parsing the playground state documents (activity journal, evolution
//! timeline, roadmap) into typed records and aggregating them into a
//! single metrics report.

pub mod audit_log;
pub mod cli;
pub mod commands;
pub mod guard;
pub mod models;
pub mod parsers;

/// Library-level error type for Sextant operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Sextant operations.
pub type Result<T> = std::result::Result<T, Error>;
