use crate::detect::ProjectType;
use serde::{Deserialize, Serialize};
use synth_extractor::FileSummary;

/// Maximum annotations rolled up from key files
pub const MAX_PROJECT_TODOS: usize = 20;
pub const MAX_PROJECT_BLOCKERS: usize = 10;

/// Summary of a whole project tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub path: String,
    pub project_type: ProjectType,
    pub name: String,
    pub description: String,
    pub version: Option<String>,

    /// Recognized files anywhere in the pruned tree
    pub file_count: usize,

    /// Line total over those same files
    pub total_lines: usize,

    /// At most 10, no duplicates
    pub main_technologies: Vec<String>,

    /// At most 30
    pub dependencies: Vec<String>,

    /// At most 20
    pub dev_dependencies: Vec<String>,

    /// At most 5, root-relative
    pub entry_points: Vec<String>,

    /// Summaries of the present key files, in priority order
    pub key_files: Vec<FileSummary>,

    /// From key files only, at most 20
    pub todos: Vec<String>,

    /// From key files only, at most 10
    pub blockers: Vec<String>,

    /// One-line history entries, newest first
    pub recent_changes: Vec<String>,
}
