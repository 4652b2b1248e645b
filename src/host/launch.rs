/// Detached editor launch
///
/// Fire and forget: the child is spawned with its standard streams
/// detached and is never waited on or inspected.
use crate::error::{LauncherError, Result};
use crate::host::results::LaunchAction;
use std::process::{Command, Stdio};
use tracing::info;

pub fn launch_detached(action: &LaunchAction) -> Result<()> {
    info!(
        program = %action.program.display(),
        args = ?action.args,
        "launching editor"
    );

    Command::new(&action.program)
        .args(&action.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            LauncherError::Launch(format!("{}: {}", action.program.display(), e))
        })?;

    // Child handle dropped on purpose; the editor outlives us
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_program_reports_launch_error() {
        let action = LaunchAction {
            program: PathBuf::from("/definitely/not/a/binary"),
            args: vec![],
        };

        let result = launch_detached(&action);
        assert!(matches!(result, Err(LauncherError::Launch(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_spawns_without_waiting() {
        let action = LaunchAction {
            program: PathBuf::from("/bin/sleep"),
            args: vec!["5".to_string()],
        };

        let start = std::time::Instant::now();
        launch_detached(&action).unwrap();
        // Returned immediately, child left running
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
    }
}
