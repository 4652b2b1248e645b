/// Search path configuration store
///
/// Persists the ordered, de-duplicated list of root directories to scan
/// as a small JSON record under `~/.unity-launcher/`. The store is the
/// single source of truth for search roots and is re-read on every query;
/// a missing or corrupt file degrades to the home-directory default and
/// never errors out of a search.
use crate::error::{LauncherError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Dotfile directory under the user's home
pub const CONFIG_DIR_NAME: &str = ".unity-launcher";

/// Config file name inside the dotfile directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// On-disk shape of the config record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    search_paths: Vec<String>,
}

/// Result of an add-path operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Result of a remove-path operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Expand a leading `~` to the user's home directory
///
/// Paths without a tilde pass through unchanged. If the home directory
/// cannot be determined the raw path is returned as-is.
pub fn expand_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    if trimmed == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(trimmed)
}

/// The path configuration store
///
/// Cheap to construct; holds only the config file location. All reads go
/// to disk so that external edits are picked up on the next query.
#[derive(Debug, Clone)]
pub struct SearchPathStore {
    config_path: PathBuf,
}

impl SearchPathStore {
    /// Create a store backed by the given config file path
    pub fn new<P: AsRef<Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Create a store at the default `~/.unity-launcher/config.json` location
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            LauncherError::Config("Could not determine home directory".to_string())
        })?;
        Ok(Self::new(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
    }

    /// The built-in fallback when no usable configuration exists
    pub fn default_roots() -> Vec<PathBuf> {
        dirs::home_dir().into_iter().collect()
    }

    /// Raw path entries as stored, in order, duplicates collapsed
    ///
    /// Missing or malformed storage yields an empty list (logged, never
    /// raised) so that callers fall back to the default roots.
    pub fn entries(&self) -> Vec<String> {
        let text = match fs::read_to_string(&self.config_path) {
            Ok(text) => text,
            Err(_) => return Vec::new(),
        };

        let config: ConfigFile = match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    path = %self.config_path.display(),
                    error = %e,
                    "config file is malformed, using default search paths"
                );
                return Vec::new();
            }
        };

        // Order-preserving dedup, membership by expanded path equality
        let mut seen: Vec<PathBuf> = Vec::new();
        let mut entries = Vec::new();
        for raw in config.search_paths {
            if raw.trim().is_empty() {
                continue;
            }
            let expanded = expand_path(&raw);
            if seen.contains(&expanded) {
                continue;
            }
            seen.push(expanded);
            entries.push(raw);
        }
        entries
    }

    /// Expanded search roots, falling back to the home directory when the
    /// store yields nothing usable
    pub fn load(&self) -> Vec<PathBuf> {
        let roots: Vec<PathBuf> = self.entries().iter().map(|e| expand_path(e)).collect();
        if roots.is_empty() {
            return Self::default_roots();
        }
        roots
    }

    /// Add a search root
    ///
    /// The path must exist and be a directory. Adding a path that is
    /// already present (by expanded-path equality) is a no-op and reports
    /// `AlreadyPresent` without touching the file.
    pub fn add_path(&self, raw: &str) -> Result<AddOutcome> {
        let expanded = expand_path(raw);
        if !expanded.is_dir() {
            return Err(LauncherError::NotADirectory(raw.to_string()));
        }

        let mut entries = self.entries();
        if entries.iter().any(|e| expand_path(e) == expanded) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        entries.push(raw.trim().to_string());
        self.save(&entries)?;
        Ok(AddOutcome::Added)
    }

    /// Remove a search root
    ///
    /// Removing a path that isn't configured reports `NotFound` and leaves
    /// the stored list untouched.
    pub fn remove_path(&self, raw: &str) -> Result<RemoveOutcome> {
        let expanded = expand_path(raw);
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|e| expand_path(e) != expanded);

        if entries.len() == before {
            return Ok(RemoveOutcome::NotFound);
        }

        self.save(&entries)?;
        Ok(RemoveOutcome::Removed)
    }

    /// The config file location backing this store
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn save(&self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config = ConfigFile {
            search_paths: entries.to_vec(),
        };
        let text = serde_json::to_string_pretty(&config)?;
        fs::write(&self.config_path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> SearchPathStore {
        SearchPathStore::new(temp.path().join("config.json"))
    }

    #[test]
    fn test_missing_config_falls_back_to_home() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert!(store.entries().is_empty());
        assert_eq!(store.load(), SearchPathStore::default_roots());
    }

    #[test]
    fn test_malformed_config_falls_back_to_home() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), "{ not json at all").unwrap();

        assert!(store.entries().is_empty());
        assert_eq!(store.load(), SearchPathStore::default_roots());
    }

    #[test]
    fn test_add_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let dir = temp.path().join("projects");
        fs::create_dir(&dir).unwrap();

        let outcome = store.add_path(dir.to_str().unwrap()).unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(store.load(), vec![dir]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::create_dir(&a).unwrap();
        fs::create_dir(&b).unwrap();

        store.add_path(a.to_str().unwrap()).unwrap();
        store.add_path(b.to_str().unwrap()).unwrap();
        let before = store.entries();

        let outcome = store.add_path(a.to_str().unwrap()).unwrap();
        assert_eq!(outcome, AddOutcome::AlreadyPresent);

        // Content and order unchanged
        assert_eq!(store.entries(), before);
    }

    #[test]
    fn test_add_rejects_missing_directory() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let result = store.add_path("/definitely/not/a/real/path");
        assert!(matches!(result, Err(LauncherError::NotADirectory(_))));
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_remove_path() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let dir = temp.path().join("projects");
        fs::create_dir(&dir).unwrap();

        store.add_path(dir.to_str().unwrap()).unwrap();
        let outcome = store.remove_path(dir.to_str().unwrap()).unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_remove_unknown_path_leaves_store_untouched() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let dir = temp.path().join("projects");
        fs::create_dir(&dir).unwrap();
        store.add_path(dir.to_str().unwrap()).unwrap();
        let before = store.entries();

        let outcome = store.remove_path("/somewhere/else").unwrap();
        assert_eq!(outcome, RemoveOutcome::NotFound);
        assert_eq!(store.entries(), before);
    }

    #[test]
    fn test_entries_dedup_preserves_order() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let config = format!(
            r#"{{"search_paths": ["{0}/b", "{0}/a", "{0}/b"]}}"#,
            temp.path().display()
        );
        fs::write(store.path(), config).unwrap();

        let entries = store.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].ends_with("/b"));
        assert!(entries[1].ends_with("/a"));
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_path("~"), home);
        assert_eq!(expand_path("~/Projects"), home.join("Projects"));
        assert_eq!(expand_path("/opt/unity"), PathBuf::from("/opt/unity"));
    }
}
