use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much per-element detail a summary carries.
///
/// Only [`DetailLevel::Brief`] changes output: it suppresses per-file
/// elements. Imports, annotations and dependencies are always computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// One-liners
    Brief,
    /// Key points
    #[default]
    Standard,
    /// Full analysis
    Detailed,
}

impl DetailLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            DetailLevel::Brief => "brief",
            DetailLevel::Standard => "standard",
            DetailLevel::Detailed => "detailed",
        }
    }

    /// Whether per-file code elements are kept in summaries
    pub fn includes_elements(self) -> bool {
        self != DetailLevel::Brief
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brief" => Ok(DetailLevel::Brief),
            "standard" => Ok(DetailLevel::Standard),
            "detailed" => Ok(DetailLevel::Detailed),
            other => Err(format!(
                "Unsupported detail level: {other} (expected brief|standard|detailed)"
            )),
        }
    }
}
