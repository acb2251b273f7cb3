use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Coarse project classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Node,
    Python,
    Rust,
    Tauri,
    Generic,
}

/// Indicator file (relative to the root) to project type; first present entry wins
pub const PROJECT_INDICATORS: &[(&str, ProjectType)] = &[
    ("package.json", ProjectType::Node),
    ("requirements.txt", ProjectType::Python),
    ("pyproject.toml", ProjectType::Python),
    ("Cargo.toml", ProjectType::Rust),
    ("src-tauri/tauri.conf.json", ProjectType::Tauri),
];

impl ProjectType {
    /// Classify `root` by the first indicator file present
    pub fn detect(root: &Path) -> Self {
        PROJECT_INDICATORS
            .iter()
            .find(|(indicator, _)| root.join(indicator).exists())
            .map_or(ProjectType::Generic, |(_, project_type)| *project_type)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Node => "node",
            ProjectType::Python => "python",
            ProjectType::Rust => "rust",
            ProjectType::Tauri => "tauri",
            ProjectType::Generic => "generic",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
