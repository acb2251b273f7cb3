use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Coarse language tag derived from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Json,
    Markdown,
    Yaml,
    Html,
    Css,
    Rust,
    Go,
    Java,
    C,
    Cpp,
    Config,
    Text,
    Unknown,
}

/// How code elements are pulled out of a file of a given language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementStrategy {
    /// Full parse with a line-anchored pattern fallback
    PythonAst,
    /// Ordered, unanchored pattern list for the brace-delimited family
    ScriptPatterns,
    /// Nothing is extracted
    None,
}

/// Lower-cased extension (without the dot) to language tag.
pub const EXTENSION_MAP: &[(&str, Language)] = &[
    ("py", Language::Python),
    ("js", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("ts", Language::TypeScript),
    ("tsx", Language::TypeScript),
    ("json", Language::Json),
    ("md", Language::Markdown),
    ("yaml", Language::Yaml),
    ("yml", Language::Yaml),
    ("html", Language::Html),
    ("htm", Language::Html),
    ("css", Language::Css),
    ("scss", Language::Css),
    ("rs", Language::Rust),
    ("go", Language::Go),
    ("java", Language::Java),
    ("c", Language::C),
    ("cpp", Language::Cpp),
    ("h", Language::C),
    ("hpp", Language::Cpp),
    ("toml", Language::Config),
    ("ini", Language::Config),
    ("cfg", Language::Config),
    ("txt", Language::Text),
];

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_lowercase();
        EXTENSION_MAP
            .iter()
            .find(|(candidate, _)| *candidate == ext)
            .map_or(Language::Unknown, |(_, language)| *language)
    }

    /// Detect language from file path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Whether the path carries one of the recognized extensions
    pub fn is_recognized_path(path: impl AsRef<Path>) -> bool {
        Self::from_path(path) != Language::Unknown
    }

    /// Get language name as string
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Yaml => "yaml",
            Language::Html => "html",
            Language::Css => "css",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Config => "config",
            Language::Text => "text",
            Language::Unknown => "unknown",
        }
    }

    pub fn element_strategy(self) -> ElementStrategy {
        match self {
            Language::Python => ElementStrategy::PythonAst,
            Language::JavaScript | Language::TypeScript => ElementStrategy::ScriptPatterns,
            _ => ElementStrategy::None,
        }
    }

    /// Manifest-shaped content that may declare dependencies
    pub fn is_manifest(self) -> bool {
        self == Language::Json
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("py"), Language::Python);
        assert_eq!(Language::from_extension("PY"), Language::Python);
        assert_eq!(Language::from_extension("jsx"), Language::JavaScript);
        assert_eq!(Language::from_extension("tsx"), Language::TypeScript);
        assert_eq!(Language::from_extension("yml"), Language::Yaml);
        assert_eq!(Language::from_extension("xyz"), Language::Unknown);
    }

    #[test]
    fn test_header_extensions_are_distinct() {
        assert_eq!(Language::from_extension("h"), Language::C);
        assert_eq!(Language::from_extension("hpp"), Language::Cpp);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path("src/main.py"), Language::Python);
        assert_eq!(Language::from_path("package.json"), Language::Json);
        assert_eq!(Language::from_path("Cargo.toml"), Language::Config);
        assert_eq!(Language::from_path("README.MD"), Language::Markdown);
        assert_eq!(Language::from_path("no_extension"), Language::Unknown);
        assert_eq!(Language::from_path(".eslintrc"), Language::Unknown);
        assert_eq!(Language::from_path("archive.tar.gz"), Language::Unknown);
    }

    #[test]
    fn every_mapped_extension_is_recognized() {
        for (ext, language) in EXTENSION_MAP {
            assert_ne!(*language, Language::Unknown, "{ext} maps to unknown");
            assert!(Language::is_recognized_path(format!("file.{ext}")));
        }
    }

    #[test]
    fn test_element_strategy() {
        assert_eq!(Language::Python.element_strategy(), ElementStrategy::PythonAst);
        assert_eq!(
            Language::TypeScript.element_strategy(),
            ElementStrategy::ScriptPatterns
        );
        assert_eq!(Language::Rust.element_strategy(), ElementStrategy::None);
    }

    #[test]
    fn serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&Language::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
        assert_eq!(Language::Cpp.to_string(), "cpp");
    }
}
