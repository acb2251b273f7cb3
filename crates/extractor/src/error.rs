use thiserror::Error;

/// Result type for extraction steps
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors raised by individual extraction steps.
///
/// These never escape the public analysis operations: each one is absorbed at
/// the step boundary and turned into a fallback path or an empty contribution.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Source did not parse cleanly
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Tree-sitter could not be set up
    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    /// Manifest content is not the expected shape
    #[error("Manifest error: {0}")]
    ManifestError(String),

    /// Manifest content is not valid JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ExtractError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a tree-sitter error
    pub fn tree_sitter(msg: impl Into<String>) -> Self {
        Self::TreeSitterError(msg.into())
    }

    /// Create a manifest shape error
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::ManifestError(msg.into())
    }
}
