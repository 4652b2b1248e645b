/// Where search roots come from
///
/// One interface, selected once at startup, answering both "what is the
/// raw configuration value right now" (the cache fingerprint) and "which
/// directories should a sweep cover". Two strategies exist: the JSON
/// config store, and a host-supplied preference string with one path per
/// line.
use crate::config::store::{expand_path, SearchPathStore};
use std::path::PathBuf;

/// Environment variable that selects the preference-string strategy
pub const PATHS_ENV_VAR: &str = "UNITY_LAUNCHER_PATHS";

/// A source of search roots
///
/// `raw_value` is read fresh on every query and compared verbatim against
/// the scan cache's fingerprint; any change forces a re-scan.
pub trait SearchPathSource {
    /// The verbatim configuration value used as the cache fingerprint
    fn raw_value(&self) -> String;

    /// Expanded search roots derived from the current raw value
    fn roots(&self) -> Vec<PathBuf>;
}

/// Roots from the persisted JSON config store
#[derive(Debug, Clone)]
pub struct ConfigFileSource {
    store: SearchPathStore,
}

impl ConfigFileSource {
    pub fn new(store: SearchPathStore) -> Self {
        Self { store }
    }
}

impl SearchPathSource for ConfigFileSource {
    fn raw_value(&self) -> String {
        self.store.entries().join("\n")
    }

    fn roots(&self) -> Vec<PathBuf> {
        self.store.load()
    }
}

/// Roots from a host preference string, one path per line
#[derive(Debug, Clone)]
pub struct PreferenceSource {
    raw: String,
}

impl PreferenceSource {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self { raw: raw.into() }
    }
}

impl SearchPathSource for PreferenceSource {
    fn raw_value(&self) -> String {
        self.raw.clone()
    }

    fn roots(&self) -> Vec<PathBuf> {
        let roots: Vec<PathBuf> = self
            .raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(expand_path)
            .collect();
        if roots.is_empty() {
            return SearchPathStore::default_roots();
        }
        roots
    }
}

/// Pick the configuration strategy for this process
///
/// A set `UNITY_LAUNCHER_PATHS` wins over the config file; otherwise the
/// default store location is used.
pub fn select_source() -> crate::error::Result<Box<dyn SearchPathSource>> {
    if let Ok(pref) = std::env::var(PATHS_ENV_VAR) {
        return Ok(Box::new(PreferenceSource::new(pref)));
    }
    Ok(Box::new(ConfigFileSource::new(
        SearchPathStore::default_location()?,
    )))
}
