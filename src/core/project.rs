/// Data models for discovered projects
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A Unity project discovered under the configured search roots
///
/// Identity is the project root directory. The editor version is an
/// opaque token lifted from the marker file; it is only ever compared for
/// equality, never ordered or semver-parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Directory basename of the project root
    pub name: String,
    /// Absolute path to the project root
    pub root: PathBuf,
    /// Version token from `m_EditorVersion:` (e.g. "2021.3.5f1")
    pub editor_version: String,
}

/// A project paired with the editor resolved for its version
///
/// A missing editor is data, not an error: it renders as a distinguishable
/// "Editor Not Found" entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedProject {
    pub project: Project,
    pub editor_path: Option<PathBuf>,
}

impl ResolvedProject {
    pub fn editor_found(&self) -> bool {
        self.editor_path.is_some()
    }
}
