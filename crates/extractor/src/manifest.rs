use crate::error::{ExtractError, Result};
use crate::language::Language;
use serde_json::{Map, Value};
use std::path::Path;

/// Maximum dependencies reported for a single manifest file
pub const MAX_FILE_DEPENDENCIES: usize = 20;

/// The fields of a structured package manifest that summaries care about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    /// Present only when the manifest carries a non-empty string
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,

    /// Keys of `dependencies`, in manifest order
    pub dependencies: Vec<String>,

    /// Keys of `devDependencies`, in manifest order
    pub dev_dependencies: Vec<String>,
}

impl PackageManifest {
    /// Decode manifest JSON.
    ///
    /// The root must be an object. A dependency field of any other shape
    /// contributes no keys without affecting the remaining fields.
    pub fn parse(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let root = value
            .as_object()
            .ok_or_else(|| ExtractError::manifest("manifest root is not an object"))?;

        Ok(Self {
            name: non_empty_string(root, "name"),
            version: non_empty_string(root, "version"),
            description: non_empty_string(root, "description"),
            dependencies: object_keys(root, "dependencies"),
            dev_dependencies: object_keys(root, "devDependencies"),
        })
    }

    /// Read and decode a manifest file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let content = crate::text::read_lossy(path)?;
        Self::parse(&content)
    }

    /// Runtime keys followed by dev keys
    pub fn all_dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .chain(&self.dev_dependencies)
            .map(String::as_str)
    }
}

fn non_empty_string(root: &Map<String, Value>, key: &str) -> Option<String> {
    root.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn object_keys(root: &Map<String, Value>, key: &str) -> Vec<String> {
    match root.get(key) {
        None => Vec::new(),
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(other) => {
            log::debug!("Ignoring manifest `{key}`: expected an object, found {other}");
            Vec::new()
        }
    }
}

/// Dependency names declared by manifest-shaped content.
///
/// Runtime then dev keys, at most [`MAX_FILE_DEPENDENCIES`]. Anything that is
/// not a decodable manifest yields an empty list.
pub fn extract_dependencies(content: &str, language: Language) -> Vec<String> {
    if !language.is_manifest() {
        return Vec::new();
    }

    match PackageManifest::parse(content) {
        Ok(manifest) => manifest
            .all_dependencies()
            .take(MAX_FILE_DEPENDENCIES)
            .map(str::to_string)
            .collect(),
        Err(e) => {
            log::debug!("Ignoring manifest dependencies: {e}");
            Vec::new()
        }
    }
}
