use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::CollectError;
use crate::models::{AgentLogRecord, Message, Role};
use crate::parsers::content::extract_text;
use crate::parsers::timestamp::{DayWindow, parse_iso8601};

/// Day-matching messages read from one agent file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentFileScan {
    /// First non-empty `sessionId` in the file, whether or not its record matched
    pub session_id: String,
    pub messages: Vec<Message>,
    pub skipped_lines: usize,
}

/// Read an `agent-*.jsonl` file line by line and keep the user/assistant
/// messages that fall inside `window`
///
/// Malformed lines and records with a missing or unparseable timestamp are
/// skipped. Any I/O failure (including invalid UTF-8) fails the whole file.
pub fn scan_agent_file(
    path: &Path,
    project: &str,
    window: &DayWindow,
) -> Result<AgentFileScan, CollectError> {
    let file = File::open(path).map_err(|e| CollectError::file_read(path, e))?;
    let reader = BufReader::new(file);
    let mut scan = AgentFileScan::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CollectError::file_read(path, e))?;

        if line.trim().is_empty() {
            continue;
        }

        let record: AgentLogRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(source) => {
                let err = CollectError::RecordParse { line: line_num + 1, source };
                tracing::debug!("Skipping line in {}: {err}", path.display());
                scan.skipped_lines += 1;
                continue;
            }
        };

        if scan.session_id.is_empty()
            && let Some(session_id) = record.session_id.as_deref()
            && !session_id.is_empty()
        {
            scan.session_id = session_id.to_string();
        }

        match record_to_message(record, project, window) {
            Ok(Some(message)) => scan.messages.push(message),
            Ok(None) => {}
            Err(e) => {
                tracing::debug!("Skipping record on line {} in {}: {e}", line_num + 1, path.display());
                scan.skipped_lines += 1;
            }
        }
    }

    if scan.skipped_lines > 0 {
        tracing::debug!(
            "Parsed {}: {} messages ({} lines skipped)",
            path.display(),
            scan.messages.len(),
            scan.skipped_lines
        );
    }

    Ok(scan)
}

/// Turn one record into a message, or `None` when it is out of the window,
/// not a user/assistant entry, or carries no text
pub fn record_to_message(
    record: AgentLogRecord,
    project: &str,
    window: &DayWindow,
) -> Result<Option<Message>, CollectError> {
    let Some(raw_ts) = record.timestamp.as_deref().filter(|ts| !ts.is_empty()) else {
        return Ok(None);
    };
    let timestamp = parse_iso8601(raw_ts)?;
    if !window.contains(timestamp) {
        return Ok(None);
    }

    let Some(entry_role) = record.entry_type.as_deref().and_then(Role::from_tag) else {
        return Ok(None);
    };

    let (role, content) = match record.message {
        Some(message) => (
            message.role.as_deref().and_then(Role::from_tag).unwrap_or(entry_role),
            message.content.as_ref().map(extract_text).unwrap_or_default(),
        ),
        None => (entry_role, String::new()),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(Message {
        role,
        content,
        timestamp,
        project: project.to_string(),
        session_id: record.session_id.unwrap_or_default(),
    }))
}

/// `agent-1a2b.jsonl` -> `1a2b`
pub fn agent_id_from_path(path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    stem.strip_prefix("agent-").unwrap_or(&stem).to_string()
}
