use crate::config::HistoryConfig;
use crate::error::{ProjectError, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use wait_timeout::ChildExt;

/// Grace period for collecting stdout once the child has exited
const OUTPUT_COLLECTION_TIMEOUT: Duration = Duration::from_secs(1);

/// Source of recent change descriptions for a project root.
///
/// Implementations never fail: unavailable history is an empty list.
pub trait HistorySource: Send + Sync {
    fn recent_changes(&self, root: &Path) -> Vec<String>;
}

/// History that is always empty
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistorySource for NoHistory {
    fn recent_changes(&self, _root: &Path) -> Vec<String> {
        Vec::new()
    }
}

/// `git log --oneline -n <max_entries>`, bounded by a timeout
#[derive(Debug, Clone)]
pub struct GitHistory {
    timeout: Duration,
    max_entries: usize,
}

impl GitHistory {
    pub fn new(timeout: Duration, max_entries: usize) -> Self {
        Self {
            timeout,
            max_entries,
        }
    }

    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::new(config.timeout, config.max_entries)
    }

    fn query(&self, root: &Path) -> Result<Vec<String>> {
        let mut child = Command::new("git")
            .arg("log")
            .arg("--oneline")
            .arg("-n")
            .arg(self.max_entries.to_string())
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // Drain stdout off-thread so a full pipe cannot stall the child.
        let (tx, rx) = mpsc::channel();
        if let Some(mut stdout) = child.stdout.take() {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = stdout.read_to_end(&mut buf);
                let _ = tx.send(buf);
            });
        } else {
            let _ = tx.send(Vec::new());
        }

        let Some(status) = child.wait_timeout(self.timeout)? else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ProjectError::HistoryTimeout(self.timeout));
        };
        if !status.success() {
            return Err(ProjectError::history(format!("git log exited with {status}")));
        }

        let stdout = rx
            .recv_timeout(OUTPUT_COLLECTION_TIMEOUT)
            .map_err(|_| ProjectError::history("git log output was not collected"))?;

        Ok(String::from_utf8_lossy(&stdout)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl Default for GitHistory {
    fn default() -> Self {
        Self::from_config(&HistoryConfig::default())
    }
}

impl HistorySource for GitHistory {
    fn recent_changes(&self, root: &Path) -> Vec<String> {
        match self.query(root) {
            Ok(changes) => changes,
            Err(e) => {
                log::debug!("No recent changes for {}: {e}", root.display());
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_history_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        assert!(NoHistory.recent_changes(temp.path()).is_empty());
    }

    #[test]
    fn non_repository_yields_empty_list() {
        // Either git is missing or the directory is not a repository; both degrade to empty.
        let temp = tempfile::tempdir().unwrap();
        let history = GitHistory::new(Duration::from_secs(5), 5);
        assert!(history.recent_changes(temp.path()).is_empty());
    }

    #[test]
    fn missing_root_yields_empty_list() {
        let temp = tempfile::tempdir().unwrap();
        let history = GitHistory::default();
        assert!(history
            .recent_changes(&temp.path().join("does-not-exist"))
            .is_empty());
    }
}
