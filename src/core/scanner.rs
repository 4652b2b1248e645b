/// Project discovery sweep
///
/// Walks the configured search roots looking for
/// `*/ProjectSettings/ProjectVersion.txt` regular files, parses each
/// marker, and deduplicates by project root. The walk is bounded by a
/// deadline: when it fires mid-root, that root's partial batch is
/// discarded and the remaining roots are skipped, so a slow disk degrades
/// to "nothing found this sweep" instead of a hang.
use crate::core::marker::{self, MARKER_FILE_NAME, SETTINGS_DIR_NAME};
use crate::core::project::Project;
use crate::core::sweep::{self, DEFAULT_SWEEP_TIMEOUT};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ProjectScanner {
    timeout: Duration,
}

impl ProjectScanner {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_SWEEP_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sweep the given roots for projects
    ///
    /// Non-existent roots are silently skipped. Output order is map
    /// iteration order (arbitrary); duplicate marker files resolving to
    /// the same root collapse to one entry, last occurrence wins.
    pub async fn scan(&self, roots: &[PathBuf]) -> Vec<Project> {
        let roots = roots.to_vec();
        let timeout = self.timeout;
        sweep::run_bounded("projects", timeout, move || sweep_projects(&roots, timeout))
            .await
            .unwrap_or_default()
    }
}

impl Default for ProjectScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn sweep_projects(roots: &[PathBuf], timeout: Duration) -> Vec<Project> {
    let deadline = Instant::now() + timeout;
    let mut by_root: HashMap<PathBuf, Project> = HashMap::new();

    'roots: for root in roots {
        if !root.is_dir() {
            continue;
        }

        // Per-root batch so a deadline mid-walk discards partial results
        // for this root only
        let mut batch = Vec::new();
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if Instant::now() >= deadline {
                warn!(
                    root = %root.display(),
                    "project sweep hit its deadline, discarding partial results for this root"
                );
                break 'roots;
            }
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name() != MARKER_FILE_NAME {
                continue;
            }
            let in_settings_dir = entry
                .path()
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n == SETTINGS_DIR_NAME)
                .unwrap_or(false);
            if !in_settings_dir {
                continue;
            }
            if let Some(project) = marker::parse_marker_file(entry.path()) {
                batch.push(project);
            }
        }

        for project in batch {
            by_root.insert(project.root.clone(), project);
        }
    }

    debug!(count = by_root.len(), "project sweep complete");
    by_root.into_values().collect()
}
