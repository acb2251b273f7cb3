use crate::config::ProjectConfig;
use crate::dependencies::DependencySet;
use crate::detect::ProjectType;
use crate::entry_points::find_entry_points;
use crate::error::{ProjectError, Result};
use crate::history::{GitHistory, HistorySource, NoHistory};
use crate::metadata::ProjectMetadata;
use crate::scanner::FileScanner;
use crate::technologies::detect_technologies;
use crate::types::{ProjectSummary, MAX_PROJECT_BLOCKERS, MAX_PROJECT_TODOS};
use std::path::Path;
use synth_extractor::{
    display_name, line_count, read_lossy, DetailLevel, FileAnalyzer, PackageManifest,
};

/// Root files summarized in detail, in priority order
pub const KEY_FILES: &[&str] = &[
    "README.md",
    "package.json",
    "requirements.txt",
    "pyproject.toml",
    "Cargo.toml",
    "main.py",
    "app.py",
    "index.js",
    "index.ts",
    "App.tsx",
    "App.jsx",
    "main.rs",
];

/// Builds a [`ProjectSummary`] for a project root
pub struct ProjectAnalyzer {
    config: ProjectConfig,
    history: Box<dyn HistorySource>,
}

impl ProjectAnalyzer {
    /// Validate `config` and pick the history source it asks for
    pub fn new(config: ProjectConfig) -> Result<Self> {
        config.validate()?;

        let history: Box<dyn HistorySource> = if config.history.enabled {
            Box::new(GitHistory::from_config(&config.history))
        } else {
            Box::new(NoHistory)
        };

        Ok(Self { config, history })
    }

    /// Default configuration at `detail_level`
    pub fn with_detail(detail_level: DetailLevel) -> Self {
        let config = ProjectConfig::default().with_detail(detail_level);
        Self {
            history: Box::new(GitHistory::from_config(&config.history)),
            config,
        }
    }

    /// Replace the history source
    #[must_use]
    pub fn with_history(mut self, history: impl HistorySource + 'static) -> Self {
        self.history = Box::new(history);
        self
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Summarize the project at `root`.
    ///
    /// Every step degrades to an empty contribution on failure; this never fails.
    pub fn analyze(&self, root: &Path) -> ProjectSummary {
        log::debug!("Analyzing project {}", root.display());

        let project_type = ProjectType::detect(root);
        let manifest = read_manifest(root);
        let metadata = ProjectMetadata::collect(root, display_name(root), manifest.as_ref());

        let files = FileScanner::new(root).scan();
        let total_lines: usize = files
            .iter()
            .filter_map(|file| match read_lossy(file) {
                Ok(content) => Some(line_count(&content)),
                Err(e) => {
                    log::debug!("Skipping line count for {}: {e}", file.display());
                    None
                }
            })
            .sum();

        let dependencies = DependencySet::collect(root, manifest.as_ref());
        let main_technologies = detect_technologies(root, manifest.as_ref());
        let entry_points = find_entry_points(root);

        let file_analyzer = FileAnalyzer::new(self.config.detail_level);
        let key_files: Vec<_> = KEY_FILES
            .iter()
            .map(|name| root.join(name))
            .filter(|path| path.is_file())
            .map(|path| file_analyzer.analyze(&path))
            .collect();

        let todos: Vec<String> = key_files
            .iter()
            .flat_map(|file| file.todos.iter().cloned())
            .take(MAX_PROJECT_TODOS)
            .collect();
        let blockers: Vec<String> = key_files
            .iter()
            .flat_map(|file| file.blockers.iter().cloned())
            .take(MAX_PROJECT_BLOCKERS)
            .collect();

        let recent_changes = self.history.recent_changes(root);

        log::debug!(
            "Project {}: {} files, {} lines, {} key files",
            metadata.name,
            files.len(),
            total_lines,
            key_files.len()
        );

        ProjectSummary {
            path: root.display().to_string(),
            project_type,
            name: metadata.name,
            description: metadata.description,
            version: metadata.version,
            file_count: files.len(),
            total_lines,
            main_technologies,
            dependencies: dependencies.dependencies,
            dev_dependencies: dependencies.dev_dependencies,
            entry_points,
            key_files,
            todos,
            blockers,
            recent_changes,
        }
    }
}

/// Summarize a project with default settings at `detail_level`
pub fn analyze_project(root: impl AsRef<Path>, detail_level: DetailLevel) -> ProjectSummary {
    ProjectAnalyzer::with_detail(detail_level).analyze(root.as_ref())
}

fn read_manifest(root: &Path) -> Option<PackageManifest> {
    let path = root.join("package.json");
    if !path.is_file() {
        return None;
    }

    match PackageManifest::read(&path).map_err(ProjectError::from) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            log::debug!("Ignoring {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HistoryConfig;
    use std::time::Duration;

    #[test]
    fn invalid_config_is_rejected() {
        let config = ProjectConfig::default().with_history(HistoryConfig {
            timeout: Duration::ZERO,
            ..HistoryConfig::default()
        });
        assert!(ProjectAnalyzer::new(config).is_err());
    }

    #[test]
    fn malformed_manifest_is_ignored() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("package.json"), "{ nope").unwrap();
        assert_eq!(read_manifest(temp.path()), None);
    }
}
