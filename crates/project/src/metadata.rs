use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use synth_extractor::{read_lossy, truncate_chars, PackageManifest};

/// Maximum characters of a description taken from a readme
pub const MAX_README_DESCRIPTION_CHARS: usize = 200;

/// Lines of the readme considered after the title line
const README_SCAN_LINES: usize = 9;

static PYPROJECT_NAME: Lazy<Regex> = Lazy::new(|| key_pattern("name"));
static PYPROJECT_VERSION: Lazy<Regex> = Lazy::new(|| key_pattern("version"));
static PYPROJECT_DESCRIPTION: Lazy<Regex> = Lazy::new(|| key_pattern("description"));

fn key_pattern(key: &str) -> Regex {
    Regex::new(&format!(r#"{key}\s*=\s*["']([^"']+)["']"#)).expect("valid pyproject key pattern")
}

/// Name, description and version of a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: String,
    pub description: String,
    pub version: Option<String>,
}

impl ProjectMetadata {
    /// Layer the known sources over `default_name`.
    ///
    /// The package manifest is applied first, then `pyproject.toml` (first
    /// match per key), then the readme supplies a description if none was
    /// found.
    pub fn collect(root: &Path, default_name: String, manifest: Option<&PackageManifest>) -> Self {
        let mut metadata = Self {
            name: default_name,
            description: String::new(),
            version: None,
        };

        if let Some(manifest) = manifest {
            metadata.apply_manifest(manifest);
        }

        let pyproject = root.join("pyproject.toml");
        if pyproject.is_file() {
            match read_lossy(&pyproject) {
                Ok(content) => metadata.apply_pyproject(&content),
                Err(e) => log::debug!("Cannot read {}: {e}", pyproject.display()),
            }
        }

        if metadata.description.is_empty() {
            let readme = root.join("README.md");
            if readme.is_file() {
                match read_lossy(&readme) {
                    Ok(content) => {
                        if let Some(description) = readme_description(&content) {
                            metadata.description = description;
                        }
                    }
                    Err(e) => log::debug!("Cannot read {}: {e}", readme.display()),
                }
            }
        }

        metadata
    }

    fn apply_manifest(&mut self, manifest: &PackageManifest) {
        if let Some(name) = &manifest.name {
            self.name = name.clone();
        }
        if let Some(description) = &manifest.description {
            self.description = description.clone();
        }
        if let Some(version) = &manifest.version {
            self.version = Some(version.clone());
        }
    }

    fn apply_pyproject(&mut self, content: &str) {
        if let Some(name) = first_capture(&PYPROJECT_NAME, content) {
            self.name = name;
        }
        if let Some(version) = first_capture(&PYPROJECT_VERSION, content) {
            self.version = Some(version);
        }
        if let Some(description) = first_capture(&PYPROJECT_DESCRIPTION, content) {
            self.description = description;
        }
    }
}

fn first_capture(pattern: &Regex, content: &str) -> Option<String> {
    pattern.captures(content).map(|caps| caps[1].to_string())
}

/// First line after the title that is neither a heading nor an image
fn readme_description(content: &str) -> Option<String> {
    content
        .split('\n')
        .skip(1)
        .take(README_SCAN_LINES)
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .map(|line| truncate_chars(line, MAX_README_DESCRIPTION_CHARS))
}
