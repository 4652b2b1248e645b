/// Marker file parsing
///
/// A Unity project announces itself through
/// `<root>/ProjectSettings/ProjectVersion.txt`. Given a candidate marker
/// path this extracts the project name, root, and required editor
/// version. Every failure mode is soft: wrong directory shape, missing
/// version line, or undecodable content all yield `None` and skip the
/// candidate.
use crate::core::project::Project;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Container directory the marker file must sit in (case-sensitive)
pub const SETTINGS_DIR_NAME: &str = "ProjectSettings";

/// Fixed marker file name
pub const MARKER_FILE_NAME: &str = "ProjectVersion.txt";

/// Key token opening the version line
const VERSION_KEY: &str = "m_EditorVersion:";

/// Parse a candidate marker file into a project record
///
/// Returns `None` unless the marker's immediate parent is exactly
/// `ProjectSettings`; the project root is the grandparent and the name is
/// the root's basename. The version is the remainder of the first
/// `m_EditorVersion:` line after the `": "` separator, trimmed.
pub fn parse_marker_file(marker_path: &Path) -> Option<Project> {
    let settings_dir = marker_path.parent()?;
    if settings_dir.file_name()? != SETTINGS_DIR_NAME {
        return None;
    }

    let root = settings_dir.parent()?;
    let name = root.file_name()?.to_str()?.to_string();

    let file = File::open(marker_path).ok()?;
    let reader = BufReader::new(file);
    for line in reader.lines() {
        // Read errors (including invalid UTF-8) drop the whole candidate
        let line = line.ok()?;
        if !line.starts_with(VERSION_KEY) {
            continue;
        }
        let version = line.splitn(2, ": ").nth(1)?.trim();
        if version.is_empty() {
            return None;
        }
        return Some(Project {
            name,
            root: root.to_path_buf(),
            editor_version: version.to_string(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_marker(dir: &Path, content: &str) -> std::path::PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(MARKER_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parses_well_formed_marker() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("MyGame");
        let marker = write_marker(
            &root.join(SETTINGS_DIR_NAME),
            "m_EditorVersion: 2021.3.5f1\nm_EditorVersionWithRevision: 2021.3.5f1 (40eb3a945986)\n",
        );

        let project = parse_marker_file(&marker).unwrap();
        assert_eq!(project.name, "MyGame");
        assert_eq!(project.root, root);
        assert_eq!(project.editor_version, "2021.3.5f1");
    }

    #[test]
    fn test_rejects_wrong_parent_directory() {
        let temp = TempDir::new().unwrap();
        // Marker one level too shallow: parent is the project dir itself
        let marker = write_marker(&temp.path().join("MyGame"), "m_EditorVersion: 2021.3.5f1\n");

        assert!(parse_marker_file(&marker).is_none());
    }

    #[test]
    fn test_rejects_missing_version_line() {
        let temp = TempDir::new().unwrap();
        let marker = write_marker(
            &temp.path().join("MyGame").join(SETTINGS_DIR_NAME),
            "m_SomethingElse: true\n",
        );

        assert!(parse_marker_file(&marker).is_none());
    }

    #[test]
    fn test_rejects_undecodable_content() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("MyGame").join(SETTINGS_DIR_NAME);
        fs::create_dir_all(&dir).unwrap();
        let marker = dir.join(MARKER_FILE_NAME);
        fs::write(&marker, [0xff, 0xfe, 0x00, 0x01]).unwrap();

        assert!(parse_marker_file(&marker).is_none());
    }

    #[test]
    fn test_rejects_missing_file() {
        let temp = TempDir::new().unwrap();
        let marker = temp
            .path()
            .join("MyGame")
            .join(SETTINGS_DIR_NAME)
            .join(MARKER_FILE_NAME);

        assert!(parse_marker_file(&marker).is_none());
    }

    #[test]
    fn test_version_line_is_trimmed() {
        let temp = TempDir::new().unwrap();
        let marker = write_marker(
            &temp.path().join("MyGame").join(SETTINGS_DIR_NAME),
            "m_EditorVersion: 2022.1.0f1   \n",
        );

        let project = parse_marker_file(&marker).unwrap();
        assert_eq!(project.editor_version, "2022.1.0f1");
    }
}
