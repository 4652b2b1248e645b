/// The discovery engine
///
/// Ties the pieces together for one query: read the live configuration,
/// re-scan if its fingerprint moved, filter projects against the query,
/// and resolve each match to an editor executable. Owned by the caller
/// and mutated only within a single request at a time; the host
/// serializes queries, so there are no locks here.
use crate::config::SearchPathSource;
use crate::core::cache::ScanCache;
use crate::core::locator::EditorLocator;
use crate::core::project::{Project, ResolvedProject};
use crate::core::scanner::ProjectScanner;
use crate::core::sweep::DEFAULT_SWEEP_TIMEOUT;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

pub struct DiscoveryEngine {
    source: Box<dyn SearchPathSource>,
    scanner: ProjectScanner,
    locator: EditorLocator,
    cache: ScanCache,
    matcher: SkimMatcherV2,
}

impl DiscoveryEngine {
    pub fn new(source: Box<dyn SearchPathSource>) -> Self {
        Self::with_timeout(source, DEFAULT_SWEEP_TIMEOUT)
    }

    /// Build an engine with an explicit sweep budget (tests use tiny and
    /// generous values)
    pub fn with_timeout(source: Box<dyn SearchPathSource>, timeout: Duration) -> Self {
        Self {
            source,
            scanner: ProjectScanner::with_timeout(timeout),
            locator: EditorLocator::with_timeout(timeout),
            cache: ScanCache::new(),
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Drop the cached fingerprint; the next query re-scans
    ///
    /// Call after a successful search-path mutation. With the config-file
    /// source this is belt and suspenders (the fingerprint moves on its
    /// own), but a preference-string host needs it.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Answer one query: matching projects, each resolved against the
    /// editor locator
    ///
    /// The filter is a case-insensitive substring matched against the
    /// project name or its root path; matches are ordered by fuzzy score
    /// so typing narrows toward the best candidate. An empty filter
    /// returns everything.
    pub async fn query(&mut self, filter: &str) -> Vec<ResolvedProject> {
        let raw = self.source.raw_value();
        let roots = existing_roots(self.source.roots());

        if !self.cache.is_valid(&raw) {
            debug!("configuration changed, re-scanning projects");
            let projects = self.scanner.scan(&roots).await;
            self.cache.replace(raw, projects);
            self.locator.reset();
        }

        let filter = filter.trim();
        let needle = filter.to_lowercase();
        let mut matches: Vec<(i64, Project)> = self
            .cache
            .projects()
            .iter()
            .filter(|p| matches_filter(p, &needle))
            .map(|p| {
                let haystack = format!("{} {}", p.name, p.root.display());
                let score = self.matcher.fuzzy_match(&haystack, filter).unwrap_or(0);
                (score, p.clone())
            })
            .collect();
        matches.sort_by(|a, b| b.0.cmp(&a.0));

        let mut results = Vec::with_capacity(matches.len());
        for (_, project) in matches {
            let editor_path = self.locator.resolve(&roots, &project.editor_version).await;
            results.push(ResolvedProject {
                project,
                editor_path,
            });
        }
        results
    }
}

fn matches_filter(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    project.name.to_lowercase().contains(needle)
        || project
            .root
            .to_string_lossy()
            .to_lowercase()
            .contains(needle)
}

fn existing_roots(roots: Vec<PathBuf>) -> Vec<PathBuf> {
    roots.into_iter().filter(|r| r.is_dir()).collect()
}
