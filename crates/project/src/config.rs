use crate::error::{ProjectError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use synth_extractor::DetailLevel;

/// Default bound on the version-history query
pub const DEFAULT_HISTORY_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of recent changes requested
pub const DEFAULT_HISTORY_ENTRIES: usize = 5;

/// Settings for a project analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Applied to every key-file summary
    #[serde(default)]
    pub detail_level: DetailLevel,

    #[serde(default)]
    pub history: HistoryConfig,
}

/// Version-history query settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// When false, `recent_changes` is always empty
    pub enabled: bool,

    /// Upper bound on the external query
    pub timeout: Duration,

    /// Number of log lines requested
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout: DEFAULT_HISTORY_TIMEOUT,
            max_entries: DEFAULT_HISTORY_ENTRIES,
        }
    }
}

impl ProjectConfig {
    /// Builder: set the detail level
    #[must_use]
    pub fn with_detail(mut self, detail_level: DetailLevel) -> Self {
        self.detail_level = detail_level;
        self
    }

    /// Builder: replace the history settings
    #[must_use]
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.history.timeout.is_zero() {
            return Err(ProjectError::invalid_config(
                "history timeout must be greater than zero",
            ));
        }

        if self.history.max_entries == 0 {
            return Err(ProjectError::invalid_config(
                "history max_entries must be greater than zero",
            ));
        }

        Ok(())
    }
}
