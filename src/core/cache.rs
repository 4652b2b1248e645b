/// Scan result cache
///
/// Holds the last computed project list together with the raw
/// configuration value it was built from. The cache is valid only while
/// the live configuration compares exactly equal to that fingerprint;
/// any mismatch (including the first call, and any explicit
/// invalidation after a path edit) forces a full re-scan. No TTL, no
/// memory bound: a local discovery cache of modest size.
use crate::core::project::Project;

#[derive(Debug, Default)]
pub struct ScanCache {
    fingerprint: Option<String>,
    projects: Vec<Project>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the stored fingerprint equals the live configuration
    pub fn is_valid(&self, live_config: &str) -> bool {
        self.fingerprint.as_deref() == Some(live_config)
    }

    /// Replace projects and fingerprint together
    pub fn replace(&mut self, live_config: String, projects: Vec<Project>) {
        self.fingerprint = Some(live_config);
        self.projects = projects;
    }

    /// The cached project list (valid for the stored fingerprint only)
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Clear the fingerprint so the next query re-scans
    pub fn invalidate(&mut self) {
        self.fingerprint = None;
    }

    /// Cache-through accessor: scan on fingerprint mismatch, otherwise
    /// return the stored list untouched
    pub fn get_projects<F>(&mut self, live_config: &str, scan: F) -> Vec<Project>
    where
        F: FnOnce() -> Vec<Project>,
    {
        if !self.is_valid(live_config) {
            let projects = scan();
            self.replace(live_config.to_string(), projects);
        }
        self.projects.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn project(name: &str) -> Project {
        Project {
            name: name.to_string(),
            root: PathBuf::from(format!("/projects/{}", name)),
            editor_version: "2021.3.5f1".to_string(),
        }
    }

    #[test]
    fn test_repeated_config_scans_once() {
        let mut cache = ScanCache::new();
        let mut scans = 0;

        let first = cache.get_projects("c1", || {
            scans += 1;
            vec![project("Alpha")]
        });
        let second = cache.get_projects("c1", || {
            scans += 1;
            vec![project("ShouldNotAppear")]
        });

        assert_eq!(scans, 1);
        assert_eq!(first, second);
        assert_eq!(second[0].name, "Alpha");
    }

    #[test]
    fn test_distinct_fingerprints_always_rescan() {
        let mut cache = ScanCache::new();
        let scans = std::cell::Cell::new(0);
        let mut run = |cache: &mut ScanCache, config: &str, label: &'static str| {
            cache.get_projects(config, || {
                scans.set(scans.get() + 1);
                vec![project(label)]
            })
        };

        // c1, c2, then c1 again: three scans, no stale reuse
        run(&mut cache, "c1", "First");
        run(&mut cache, "c2", "Second");
        let third = run(&mut cache, "c1", "Third");

        assert_eq!(scans.get(), 3);
        assert_eq!(third[0].name, "Third");
    }

    #[test]
    fn test_first_call_is_always_a_miss() {
        let cache = ScanCache::new();
        assert!(!cache.is_valid(""));
        assert!(!cache.is_valid("anything"));
    }

    #[test]
    fn test_invalidate_forces_rescan() {
        let mut cache = ScanCache::new();
        cache.replace("c1".to_string(), vec![project("Alpha")]);
        assert!(cache.is_valid("c1"));

        cache.invalidate();
        assert!(!cache.is_valid("c1"));

        let mut scans = 0;
        cache.get_projects("c1", || {
            scans += 1;
            vec![project("Fresh")]
        });
        assert_eq!(scans, 1);
        assert_eq!(cache.projects()[0].name, "Fresh");
    }
}
