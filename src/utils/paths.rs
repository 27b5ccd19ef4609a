use std::path::{Path, PathBuf};

/// Encodes a project path into Claude's project directory name
///
/// Every `/` becomes `-`. The encoding is lossy (`/foo/bar` and `/foo-bar`
/// collide) and cannot be inverted; all callers go through this function.
///
/// # Examples
///
/// ```
/// use claude_daylog::encode_project_path;
///
/// assert_eq!(encode_project_path("/Users/foo/bar"), "-Users-foo-bar");
/// ```
pub fn encode_project_path(project: &str) -> String {
    project.replace('/', "-")
}

/// Directory under `projects/` holding the agent files of `project`
pub fn project_log_dir(projects_dir: &Path, project: &str) -> PathBuf {
    projects_dir.join(encode_project_path(project))
}

/// Last path component of a project, or the whole path if it has none
pub fn project_display_name(project: &str) -> &str {
    Path::new(project).file_name().and_then(|name| name.to_str()).unwrap_or(project)
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_home(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_path_with_home(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}
