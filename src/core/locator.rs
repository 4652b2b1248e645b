/// Editor discovery and version resolution
///
/// Finds versioned Unity editor executables under the search roots and
/// answers "which executable satisfies version V". The locator sweeps the
/// filesystem at most once per configuration generation: the first
/// unresolved lookup pays for a full sweep that memoizes every editor it
/// finds, and after that unknown versions short-circuit to "not found"
/// without rescanning. That staleness is a deliberate latency trade-off;
/// the memo and the swept flag only reset when the configuration changes.
use crate::core::sweep::{self, DEFAULT_SWEEP_TIMEOUT};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Fixed executable name
pub const EDITOR_EXECUTABLE_NAME: &str = "Unity";

/// Directory the executable must sit in: `<version>/Editor/Unity`
pub const EDITOR_DIR_NAME: &str = "Editor";

#[derive(Debug)]
pub struct EditorLocator {
    editors: HashMap<String, PathBuf>,
    scanned: bool,
    timeout: Duration,
}

impl EditorLocator {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_SWEEP_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            editors: HashMap::new(),
            scanned: false,
            timeout,
        }
    }

    /// Whether the one sweep for this generation has already happened
    pub fn has_scanned(&self) -> bool {
        self.scanned
    }

    /// Forget everything; the next unresolved lookup sweeps again
    pub fn reset(&mut self) {
        self.editors.clear();
        self.scanned = false;
    }

    /// Resolve a required version to an executable path
    ///
    /// Memoized hits return immediately. The first miss triggers the
    /// sweep; after it completes (timeout included) further misses return
    /// `None` without touching the filesystem.
    pub async fn resolve(&mut self, roots: &[PathBuf], required_version: &str) -> Option<PathBuf> {
        if let Some(path) = self.editors.get(required_version) {
            return Some(path.clone());
        }
        if self.scanned {
            return None;
        }

        let roots = roots.to_vec();
        let timeout = self.timeout;
        let found = sweep::run_bounded("editors", timeout, move || sweep_editors(&roots, timeout))
            .await
            .unwrap_or_default();

        self.editors.extend(found);
        self.scanned = true;

        self.editors.get(required_version).cloned()
    }
}

impl Default for EditorLocator {
    fn default() -> Self {
        Self::new()
    }
}

fn sweep_editors(roots: &[PathBuf], timeout: Duration) -> HashMap<String, PathBuf> {
    let deadline = Instant::now() + timeout;
    let mut editors = HashMap::new();

    'roots: for root in roots {
        if !root.is_dir() {
            continue;
        }

        let mut batch = Vec::new();
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if Instant::now() >= deadline {
                warn!(
                    root = %root.display(),
                    "editor sweep hit its deadline, discarding partial results for this root"
                );
                break 'roots;
            }
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name() != EDITOR_EXECUTABLE_NAME {
                continue;
            }
            if !is_executable(entry.path()) {
                continue;
            }
            if let Some(pair) = version_from_path(entry.path()) {
                batch.push(pair);
            }
        }

        for (version, path) in batch {
            editors.insert(version, path);
        }
    }

    debug!(count = editors.len(), "editor sweep complete");
    editors
}

/// Infer the version token from `.../<version>/Editor/Unity`
///
/// Only accepted when the version directory's first character is a
/// decimal digit, which keeps names like `Hub` or `beta` out of the memo.
fn version_from_path(path: &Path) -> Option<(String, PathBuf)> {
    let editor_dir = path.parent()?;
    if editor_dir.file_name()? != EDITOR_DIR_NAME {
        return None;
    }
    let version = editor_dir.parent()?.file_name()?.to_str()?;
    if !version.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((version.to_string(), path.to_path_buf()))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
