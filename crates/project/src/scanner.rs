use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use synth_extractor::Language;

/// Directory names pruned at every depth of a project walk
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    ".env",
    "dist",
    "build",
    "target",
    ".next",
    ".nuxt",
    "coverage",
];

/// Recursive collector of recognized files under a project root
pub struct FileScanner {
    root: PathBuf,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Every file with a recognized extension, in file-name order per directory.
    ///
    /// Hidden files and ignore files get no special treatment; only
    /// [`SKIP_DIRS`] prunes the walk.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        builder.filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if is_dir && entry.depth() > 0 && Self::is_skipped_dir(entry.path()) {
                log::debug!("Pruning {}", entry.path().display());
                return false;
            }
            true
        });

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    let path = entry.path();
                    // Symlinked files count; symlinked directories are not descended.
                    let is_file =
                        file_type.is_file() || (file_type.is_symlink() && path.is_file());
                    if !is_file {
                        continue;
                    }

                    if Language::is_recognized_path(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => log::debug!("Failed to read entry: {e}"),
            }
        }

        log::debug!(
            "Found {} recognized files under {}",
            files.len(),
            self.root.display()
        );
        files
    }

    fn is_skipped_dir(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| SKIP_DIRS.contains(&name))
    }
}
