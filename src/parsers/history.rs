use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::CollectError;
use crate::models::{HistoryRecord, SessionIndex};
use crate::parsers::timestamp::{DayWindow, RawTimestamp};

/// Scan `history.jsonl` and group the sessions seen during `window` by project
///
/// A missing or unreadable file is reported and yields an empty index. Lines
/// that are not valid records are skipped. Records without a project or a
/// session id, or outside the window, are left out.
pub fn sessions_for_day(path: &Path, window: &DayWindow) -> SessionIndex {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            let err = if e.kind() == ErrorKind::NotFound {
                CollectError::MissingSource { what: "history file", path: path.to_path_buf() }
            } else {
                CollectError::file_read(path, e)
            };
            tracing::warn!("{err}");
            return SessionIndex::new();
        }
    };

    let mut index = SessionIndex::new();
    let mut skipped = 0usize;

    for (line_num, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            // The bad line's bytes are already consumed, so the scan can go on
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::debug!("Skipping history line {}: {e}", line_num + 1);
                skipped += 1;
                continue;
            }
            Err(e) => {
                tracing::warn!(
                    "{}; keeping {} projects read so far",
                    CollectError::file_read(path, e),
                    index.len()
                );
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let record = match parse_history_line(&line, line_num + 1) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("Skipping history line: {e}");
                skipped += 1;
                continue;
            }
        };

        if !in_window(record.timestamp.as_ref(), window) {
            continue;
        }

        match (record.project, record.session_id) {
            (Some(project), Some(session_id)) if !project.is_empty() && !session_id.is_empty() => {
                index.insert(project, session_id);
            }
            _ => {}
        }
    }

    if skipped > 0 {
        tracing::debug!("Parsed history file: {} projects ({} lines skipped)", index.len(), skipped);
    }

    index
}

fn parse_history_line(line: &str, line_num: usize) -> Result<HistoryRecord, CollectError> {
    serde_json::from_str(line).map_err(|source| CollectError::RecordParse { line: line_num, source })
}

fn in_window(timestamp: Option<&RawTimestamp>, window: &DayWindow) -> bool {
    let Some(raw) = timestamp else {
        return false;
    };

    match raw {
        RawTimestamp::Millis(ms) => window.contains_millis(*ms),
        RawTimestamp::Text(_) => match raw.to_local_naive() {
            Ok(ts) => window.contains(ts),
            Err(e) => {
                tracing::debug!("Skipping history record: {e}");
                false
            }
        },
    }
}
