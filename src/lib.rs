/// unity-launcher library
///
/// Discovers Unity projects under configured search roots, locates the
/// matching editor for each, and renders launchable result entries.

pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod util;

// Re-exports for convenience
pub use config::{select_source, SearchPathSource, SearchPathStore};
pub use core::DiscoveryEngine;
pub use error::{LauncherError, Result};
