use crate::annotations::{scan_blockers, scan_todos};
use crate::config::DetailLevel;
use crate::elements::extract;
use crate::language::Language;
use crate::manifest::extract_dependencies;
use crate::text::{line_count, read_lossy};
use crate::types::{ElementKind, FileSummary, FolderSummary};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds [`FileSummary`] and [`FolderSummary`] values at a fixed detail level
#[derive(Debug, Clone, Copy, Default)]
pub struct FileAnalyzer {
    detail_level: DetailLevel,
}

impl FileAnalyzer {
    pub fn new(detail_level: DetailLevel) -> Self {
        Self { detail_level }
    }

    pub fn detail_level(&self) -> DetailLevel {
        self.detail_level
    }

    /// Summarize one file.
    ///
    /// Unreadable content is treated as empty and a failed size probe reports
    /// zero bytes; this never fails.
    pub fn analyze(&self, path: &Path) -> FileSummary {
        let content = read_lossy(path).unwrap_or_else(|e| {
            log::debug!("Treating {} as empty: {e}", path.display());
            String::new()
        });
        let size_bytes = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        self.analyze_content(path, &content, size_bytes)
    }

    /// Summarize already-decoded content as if it were read from `path`
    pub fn analyze_content(&self, path: &Path, content: &str, size_bytes: u64) -> FileSummary {
        let language = Language::from_path(path);
        let extraction = extract(content, language);
        let lines = line_count(content);

        let mut summary = FileSummary {
            path: path.display().to_string(),
            language,
            size_bytes,
            line_count: lines,
            description: String::new(),
            elements: extraction.elements,
            imports: extraction.imports,
            todos: scan_todos(content),
            blockers: scan_blockers(content),
            dependencies: extract_dependencies(content, language),
        };

        // Counts reflect every element, even when the list is suppressed below.
        summary.description = describe_file(path, &summary);
        if !self.detail_level.includes_elements() {
            summary.elements.clear();
        }

        summary
    }

    /// Summarize the recognized files directly inside `path`, sorted by name.
    ///
    /// Subdirectories are not visited. An unreadable directory yields an empty
    /// summary.
    pub fn summarize_folder(&self, path: &Path) -> FolderSummary {
        let mut files: Vec<PathBuf> = match fs::read_dir(path) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|p| p.is_file() && Language::is_recognized_path(p))
                .collect(),
            Err(e) => {
                log::debug!("Cannot list {}: {e}", path.display());
                Vec::new()
            }
        };
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let summaries: Vec<FileSummary> = files.iter().map(|file| self.analyze(file)).collect();

        let mut languages: BTreeMap<String, usize> = BTreeMap::new();
        let mut first_seen: Vec<&'static str> = Vec::new();
        for summary in &summaries {
            let tag = summary.language.as_str();
            *languages.entry(tag.to_string()).or_default() += 1;
            if !first_seen.contains(&tag) {
                first_seen.push(tag);
            }
        }

        let mut description = format!("{} files in {}", summaries.len(), display_name(path));
        let mut primary: Option<(&str, usize)> = None;
        for tag in first_seen {
            let count = languages.get(tag).copied().unwrap_or(0);
            if primary.map_or(true, |(_, best)| count > best) {
                primary = Some((tag, count));
            }
        }
        if let Some((tag, _)) = primary {
            description.push_str(&format!(", primarily {tag}"));
        }

        FolderSummary {
            path: path.display().to_string(),
            file_count: summaries.len(),
            total_lines: summaries.iter().map(|s| s.line_count).sum(),
            languages,
            files: summaries,
            description,
        }
    }
}

/// Summarize one file at `detail_level`
pub fn analyze_file(path: impl AsRef<Path>, detail_level: DetailLevel) -> FileSummary {
    FileAnalyzer::new(detail_level).analyze(path.as_ref())
}

/// Summarize the recognized files directly inside a folder at `detail_level`
pub fn summarize_folder(path: impl AsRef<Path>, detail_level: DetailLevel) -> FolderSummary {
    FileAnalyzer::new(detail_level).summarize_folder(path.as_ref())
}

/// `"<name> - <n> class(es) - <m> function(s) - <lines> lines"`, omitting zero counts
fn describe_file(path: &Path, summary: &FileSummary) -> String {
    let mut parts = vec![display_name(path)];

    let classes = summary.count_of(ElementKind::Class);
    if classes > 0 {
        parts.push(format!("{classes} class(es)"));
    }
    let functions = summary.count_of(ElementKind::Function);
    if functions > 0 {
        parts.push(format!("{functions} function(s)"));
    }
    parts.push(format!("{} lines", summary.line_count));

    parts.join(" - ")
}

/// Final path component, falling back to the canonical directory name for
/// paths such as `.`
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            path.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn description_omits_zero_counts() {
        let analyzer = FileAnalyzer::default();
        let summary = analyzer.analyze_content(Path::new("notes.md"), "# Notes\n", 8);
        assert_eq!(summary.description, "notes.md - 2 lines");

        let code = "class A:\n    pass\n\ndef f():\n    pass\n\ndef g():\n    pass\n";
        let summary = analyzer.analyze_content(Path::new("pkg/mod.py"), code, code.len() as u64);
        assert_eq!(summary.description, "mod.py - 1 class(es) - 2 function(s) - 9 lines");
    }

    #[test]
    fn brief_keeps_counts_in_description() {
        let code = "def f():\n    pass\n";
        let brief = FileAnalyzer::new(DetailLevel::Brief);
        let summary = brief.analyze_content(Path::new("f.py"), code, 0);
        assert!(summary.elements.is_empty());
        assert_eq!(summary.description, "f.py - 1 function(s) - 3 lines");
    }

    #[test]
    fn display_name_resolves_dot() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("proj");
        fs::create_dir(&nested).unwrap();
        assert_eq!(display_name(&nested.join(".")), "proj");
        assert_eq!(display_name(Path::new("a/b/c.txt")), "c.txt");
    }
}
