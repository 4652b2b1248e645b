pub mod cache;
pub mod engine;
pub mod locator;
pub mod marker;
pub mod project;
pub mod scanner;
mod sweep;

pub use cache::ScanCache;
pub use engine::DiscoveryEngine;
pub use locator::EditorLocator;
pub use project::{Project, ResolvedProject};
pub use scanner::ProjectScanner;
pub use sweep::DEFAULT_SWEEP_TIMEOUT;
