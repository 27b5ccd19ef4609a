use std::fs;
use std::path::{Path, PathBuf};

use crate::collector::assembler::assemble;
use crate::error::CollectError;
use crate::models::Conversation;
use crate::parsers::conversation::{agent_id_from_path, scan_agent_file};
use crate::parsers::timestamp::DayWindow;
use crate::utils::project_log_dir;

const AGENT_FILE_PREFIX: &str = "agent-";
const AGENT_FILE_SUFFIX: &str = ".jsonl";

/// Read every agent file of `project` and return one conversation per file
/// that has at least one message inside `window`
///
/// A missing project directory is reported and yields nothing. Files that
/// cannot be read are reported and skipped; their siblings are still read.
pub fn read_project(projects_dir: &Path, project: &str, window: &DayWindow) -> Vec<Conversation> {
    let dir = project_log_dir(projects_dir, project);
    if !dir.is_dir() {
        tracing::warn!("{}", CollectError::MissingSource { what: "project directory", path: dir });
        return Vec::new();
    }

    let agent_files = match find_agent_files(&dir) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!("{e}");
            return Vec::new();
        }
    };

    agent_files
        .iter()
        .filter_map(|path| match scan_agent_file(path, project, window) {
            Ok(scan) if scan.messages.is_empty() => None,
            Ok(scan) => {
                Some(assemble(project, scan.session_id, agent_id_from_path(path), scan.messages))
            }
            Err(e) => {
                tracing::warn!("Skipping agent file: {e}");
                None
            }
        })
        .collect()
}

/// List the `agent-*.jsonl` files of a project directory in path order
pub fn find_agent_files(dir: &Path) -> Result<Vec<PathBuf>, CollectError> {
    let entries = fs::read_dir(dir).map_err(|e| CollectError::file_read(dir, e))?;

    let mut agent_files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| {
                    name.starts_with(AGENT_FILE_PREFIX) && name.ends_with(AGENT_FILE_SUFFIX)
                })
        })
        .collect();
    agent_files.sort();

    Ok(agent_files)
}
