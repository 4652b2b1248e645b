/// Result entries handed back to the host
///
/// Each entry carries a display name, a description, an icon reference,
/// and an optional activation action. A project whose editor could not be
/// found still renders as an ordinary entry with explanatory text; the
/// discovery path never hands the host an error.
use crate::core::project::ResolvedProject;
use std::path::{Path, PathBuf};

/// Fixed icon reference for every entry
pub const UNITY_ICON: &str = "images/unity.png";

/// Launch an external process with these arguments, detached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchAction {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl LaunchAction {
    /// `<editor> -projectPath <root>`
    pub fn open_project(editor: &Path, project_root: &Path) -> Self {
        Self {
            program: editor.to_path_buf(),
            args: vec![
                "-projectPath".to_string(),
                project_root.display().to_string(),
            ],
        }
    }
}

/// One rendered result row
#[derive(Debug, Clone)]
pub struct ResultEntry {
    pub name: String,
    pub description: String,
    pub icon: &'static str,
    pub action: Option<LaunchAction>,
}

/// Render a resolved project as a result entry
pub fn project_entry(resolved: &ResolvedProject) -> ResultEntry {
    let project = &resolved.project;
    match &resolved.editor_path {
        Some(editor) => ResultEntry {
            name: format!("{} ({})", project.name, project.editor_version),
            description: format!("Path: {}", project.root.display()),
            icon: UNITY_ICON,
            action: Some(LaunchAction::open_project(editor, &project.root)),
        },
        None => ResultEntry {
            name: format!(
                "{} ({}) - Editor Not Found!",
                project.name, project.editor_version
            ),
            description: format!(
                "Path: {}. Unity Editor for this version ({}) could not be found or accessed on your system.",
                project.root.display(),
                project.editor_version
            ),
            icon: UNITY_ICON,
            action: None,
        },
    }
}

/// The entry shown when a query produced no rows
pub fn placeholder_entry(had_projects: bool, query: &str) -> ResultEntry {
    let description = if !had_projects {
        "No Unity projects found in the configured search paths.".to_string()
    } else if query.trim().is_empty() {
        "Unity projects found. Start typing to search.".to_string()
    } else {
        format!(
            "No Unity project matching '{}' found. Check your project locations and search term.",
            query.trim()
        )
    };

    ResultEntry {
        name: "Unity Project Not Found".to_string(),
        description,
        icon: UNITY_ICON,
        action: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project::Project;

    fn resolved(editor: Option<&str>) -> ResolvedProject {
        ResolvedProject {
            project: Project {
                name: "MyGame".to_string(),
                root: PathBuf::from("/home/user/MyGame"),
                editor_version: "2021.3.5f1".to_string(),
            },
            editor_path: editor.map(PathBuf::from),
        }
    }

    #[test]
    fn test_entry_with_editor_carries_launch_action() {
        let entry = project_entry(&resolved(Some("/opt/unity/2021.3.5f1/Editor/Unity")));

        assert_eq!(entry.name, "MyGame (2021.3.5f1)");
        assert_eq!(entry.description, "Path: /home/user/MyGame");
        let action = entry.action.unwrap();
        assert_eq!(
            action.program,
            PathBuf::from("/opt/unity/2021.3.5f1/Editor/Unity")
        );
        assert_eq!(action.args, vec!["-projectPath", "/home/user/MyGame"]);
    }

    #[test]
    fn test_entry_without_editor_has_no_action() {
        let entry = project_entry(&resolved(None));

        assert!(entry.name.contains("Editor Not Found!"));
        assert!(entry.description.contains("2021.3.5f1"));
        assert!(entry.action.is_none());
    }

    #[test]
    fn test_placeholder_texts() {
        let entry = placeholder_entry(false, "");
        assert!(entry.description.contains("No Unity projects found"));

        let entry = placeholder_entry(true, "");
        assert!(entry.description.contains("Start typing"));

        let entry = placeholder_entry(true, "shooter");
        assert!(entry.description.contains("'shooter'"));
    }
}
