//! # Synth Extractor
//!
//! Best-effort, per-file context extraction for quick situational snapshots of
//! unfamiliar code.
//!
//! ## Pipeline
//!
//! ```text
//! File path
//!     │
//!     ├──> Language Detection (extension only)
//!     │
//!     ├──> Content (lossy decode, unreadable → empty)
//!     │
//!     ├──> Element Extraction
//!     │    ├─> Python: Tree-sitter parse, pattern fallback on syntax errors
//!     │    └─> JavaScript/TypeScript: ordered pattern list
//!     │
//!     ├──> Annotation Scan (TODO / FIXME, HACK, BUG, XXX)
//!     │
//!     ├──> Manifest Dependencies (JSON only)
//!     │
//!     └──> FileSummary
//! ```
//!
//! No operation in this crate fails: degraded input produces fewer facts, never
//! an error.
//!
//! ## Example
//!
//! ```rust
//! use synth_extractor::{extract, ElementKind, Language};
//!
//! let code = "def greet(name):\n    return name\n";
//! let extraction = extract(code, Language::Python);
//!
//! assert_eq!(extraction.elements[0].name, "greet");
//! assert_eq!(extraction.elements[0].kind, ElementKind::Function);
//! ```

mod analyzer;
mod annotations;
mod ast_analyzer;
mod config;
mod elements;
mod error;
mod language;
mod manifest;
mod patterns;
mod text;
mod types;

pub use analyzer::{analyze_file, display_name, summarize_folder, FileAnalyzer};
pub use annotations::{scan_blockers, scan_todos, MAX_ANNOTATIONS, MAX_ANNOTATION_CHARS};
pub use config::DetailLevel;
pub use elements::{extract, Extraction};
pub use error::{ExtractError, Result};
pub use language::{ElementStrategy, Language, EXTENSION_MAP};
pub use manifest::{extract_dependencies, PackageManifest, MAX_FILE_DEPENDENCIES};
pub use text::{decode_lossy, line_count, read_lossy, truncate_chars};
pub use types::{CodeElement, ElementKind, FileSummary, FolderSummary, MAX_SUMMARY_CHARS};
