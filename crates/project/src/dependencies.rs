use std::path::Path;
use synth_extractor::{read_lossy, PackageManifest};

/// Maximum runtime dependencies in a project summary
pub const MAX_DEPENDENCIES: usize = 30;

/// Maximum dev dependencies in a project summary
pub const MAX_DEV_DEPENDENCIES: usize = 20;

/// Characters that start a version constraint in a requirements line
const VERSION_OPERATORS: &[char] = &['<', '>', '=', '!', '~'];

/// Runtime and dev dependency names of a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl DependencySet {
    /// Manifest runtime keys then `requirements.txt` packages, and manifest dev keys, both capped
    pub fn collect(root: &Path, manifest: Option<&PackageManifest>) -> Self {
        let mut set = Self::default();

        if let Some(manifest) = manifest {
            set.dependencies.extend(manifest.dependencies.iter().cloned());
            set.dev_dependencies
                .extend(manifest.dev_dependencies.iter().cloned());
        }

        let requirements = root.join("requirements.txt");
        if requirements.is_file() {
            match read_lossy(&requirements) {
                Ok(content) => set.dependencies.extend(parse_requirements(&content)),
                Err(e) => log::debug!("Cannot read {}: {e}", requirements.display()),
            }
        }

        set.dependencies.truncate(MAX_DEPENDENCIES);
        set.dev_dependencies.truncate(MAX_DEV_DEPENDENCIES);
        set
    }
}

/// Bare package names from a requirements listing
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let name = line
                .split(VERSION_OPERATORS)
                .next()
                .unwrap_or_default()
                .trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}
