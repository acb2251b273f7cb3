//! # Synth Project
//!
//! Project-level context summaries built on top of `synth-extractor`.
//!
//! ## Steps
//!
//! ```text
//! Project root
//!     │
//!     ├──> Type Detection (first indicator file wins)
//!     ├──> Metadata (package.json → pyproject.toml → README.md)
//!     ├──> Recursive Scan (skip-dir pruning, recognized extensions)
//!     ├──> Line Totals
//!     ├──> Dependencies (manifest + requirements.txt)
//!     ├──> Technologies (indicator files + manifest dependencies)
//!     ├──> Entry Points (root, then src/)
//!     ├──> Key Files (FileAnalyzer, sole source of TODOs/blockers)
//!     └──> Recent Changes (git log, bounded by a timeout)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use synth_extractor::DetailLevel;
//! use synth_project::analyze_project;
//!
//! let summary = analyze_project(".", DetailLevel::Standard);
//! println!("{} ({})", summary.name, summary.project_type);
//! ```

mod analyzer;
mod config;
mod dependencies;
mod detect;
mod entry_points;
mod error;
mod history;
mod metadata;
mod scanner;
mod technologies;
mod types;

pub use analyzer::{analyze_project, ProjectAnalyzer, KEY_FILES};
pub use config::{HistoryConfig, ProjectConfig, DEFAULT_HISTORY_ENTRIES, DEFAULT_HISTORY_TIMEOUT};
pub use dependencies::{parse_requirements, DependencySet, MAX_DEPENDENCIES, MAX_DEV_DEPENDENCIES};
pub use detect::{ProjectType, PROJECT_INDICATORS};
pub use entry_points::{find_entry_points, ENTRY_POINT_NAMES, MAX_ENTRY_POINTS};
pub use error::{ProjectError, Result};
pub use history::{GitHistory, HistorySource, NoHistory};
pub use metadata::{ProjectMetadata, MAX_README_DESCRIPTION_CHARS};
pub use scanner::{FileScanner, SKIP_DIRS};
pub use technologies::{
    detect_technologies, DEPENDENCY_TECHNOLOGIES, MAX_TECHNOLOGIES, TECHNOLOGY_INDICATORS,
};
pub use types::{ProjectSummary, MAX_PROJECT_BLOCKERS, MAX_PROJECT_TODOS};
