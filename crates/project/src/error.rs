use std::time::Duration;
use synth_extractor::ExtractError;
use thiserror::Error;

/// Result type for project analysis steps
pub type Result<T> = std::result::Result<T, ProjectError>;

/// Errors raised inside project analysis.
///
/// Only [`ProjectError::InvalidConfig`] reaches callers (from
/// [`crate::ProjectAnalyzer::new`]); every other variant is absorbed by the
/// step that produced it.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] ExtractError),

    #[error("History query failed: {0}")]
    History(String),

    #[error("History query timed out after {0:?}")]
    HistoryTimeout(Duration),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ProjectError {
    pub fn history(msg: impl Into<String>) -> Self {
        Self::History(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
