use crate::language::Language;
use crate::text::truncate_chars;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum characters kept from a doc comment
pub const MAX_SUMMARY_CHARS: usize = 100;

/// Kind of named code element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Function,
    Class,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Function => "function",
            ElementKind::Class => "class",
        }
    }
}

/// A named function or class declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeElement {
    /// Identifier as written in source
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Declaration line (1-indexed)
    #[serde(rename = "line")]
    pub declaration_line: usize,

    /// Doc comment, at most [`MAX_SUMMARY_CHARS`] characters
    #[serde(rename = "docstring")]
    pub summary_text: Option<String>,

    /// Declared parameter names in source order (functions from a full parse only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<String>>,
}

impl CodeElement {
    #[must_use]
    pub fn function(name: impl Into<String>, declaration_line: usize) -> Self {
        Self::new(name, ElementKind::Function, declaration_line)
    }

    #[must_use]
    pub fn class(name: impl Into<String>, declaration_line: usize) -> Self {
        Self::new(name, ElementKind::Class, declaration_line)
    }

    fn new(name: impl Into<String>, kind: ElementKind, declaration_line: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            declaration_line,
            summary_text: None,
            parameters: None,
        }
    }

    /// Builder: attach a doc comment, truncated to [`MAX_SUMMARY_CHARS`]
    #[must_use]
    pub fn with_summary(mut self, summary: Option<&str>) -> Self {
        self.summary_text = summary.map(|text| truncate_chars(text, MAX_SUMMARY_CHARS));
        self
    }

    /// Builder: set declared parameter names
    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<String>) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

/// Summary of a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub path: String,

    #[serde(rename = "file_type")]
    pub language: Language,

    pub size_bytes: u64,

    /// Always at least 1
    pub line_count: usize,

    pub description: String,

    /// Empty at [`crate::DetailLevel::Brief`]
    #[serde(rename = "key_elements")]
    pub elements: Vec<CodeElement>,

    pub imports: Vec<String>,

    /// At most 10
    pub todos: Vec<String>,

    /// At most 10
    pub blockers: Vec<String>,

    /// At most 20, manifest files only
    pub dependencies: Vec<String>,
}

impl FileSummary {
    pub fn count_of(&self, kind: ElementKind) -> usize {
        self.elements.iter().filter(|e| e.kind == kind).count()
    }
}

/// Shallow summary of the recognized files directly inside a folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
    pub path: String,
    pub file_count: usize,
    pub total_lines: usize,

    /// Language tag to number of files
    #[serde(rename = "file_types")]
    pub languages: BTreeMap<String, usize>,

    pub files: Vec<FileSummary>,
    pub description: String,
}
