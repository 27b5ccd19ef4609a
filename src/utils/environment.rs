use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable Claude Code honours for relocating `~/.claude`
pub const CLAUDE_CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

const HISTORY_FILENAME: &str = "history.jsonl";
const PROJECTS_DIRNAME: &str = "projects";

/// Locations of the logs inside a Claude data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudePaths {
    pub claude_dir: PathBuf,
    pub history_file: PathBuf,
    pub projects_dir: PathBuf,
}

impl ClaudePaths {
    pub fn new(claude_dir: impl Into<PathBuf>) -> Self {
        let claude_dir = claude_dir.into();
        Self {
            history_file: claude_dir.join(HISTORY_FILENAME),
            projects_dir: claude_dir.join(PROJECTS_DIRNAME),
            claude_dir,
        }
    }

    /// Resolve the data directory: explicit override, then `CLAUDE_CONFIG_DIR`,
    /// then `~/.claude`
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        let from_env = env::var_os(CLAUDE_CONFIG_DIR_ENV).map(PathBuf::from);
        resolve_claude_dir(override_dir, from_env, dirs::home_dir()).map(Self::new)
    }
}

fn resolve_claude_dir(
    override_dir: Option<&Path>,
    from_env: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = from_env.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    let home = home.context("Could not determine home directory")?;
    Ok(home.join(".claude"))
}
