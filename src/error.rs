/// Error types for unity-launcher
///
/// Only the hard boundary surfaces here (I/O, storage, bad arguments).
/// Everything inside the discovery path degrades to empty or partial
/// results instead of erroring: a marker file that doesn't parse, a sweep
/// that hits its deadline, or an editor that can't be found all turn into
/// skipped candidates or "not found" entries, never into a fault.
use thiserror::Error;

/// Main error type for unity-launcher operations
#[derive(Error, Debug)]
pub enum LauncherError {
    /// I/O errors (config file reads/writes, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error (missing home directory, unusable store)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A path argument that doesn't point at an existing directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Spawning the editor process failed
    #[error("Launch failed: {0}")]
    Launch(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for unity-launcher operations
pub type Result<T> = std::result::Result<T, LauncherError>;

/// Convert LauncherError to a user-friendly error message
impl LauncherError {
    pub fn user_message(&self) -> String {
        match self {
            LauncherError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            LauncherError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            LauncherError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            LauncherError::NotADirectory(path) => {
                format!("'{}' does not exist or is not a directory", path)
            }
            LauncherError::Launch(msg) => {
                format!("Could not start the Unity editor: {}", msg)
            }
            LauncherError::Generic(msg) => msg.clone(),
        }
    }
}
