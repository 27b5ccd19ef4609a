//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use claude_daylog::encode_project_path;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Epoch milliseconds of a local wall-clock time `YYYY-MM-DD HH:MM:SS`
pub fn local_millis(local: &str) -> i64 {
    let naive = NaiveDateTime::parse_from_str(local, "%Y-%m-%d %H:%M:%S")
        .expect("Invalid local datetime in test");
    Local.from_local_datetime(&naive).earliest().expect("Nonexistent local time").timestamp_millis()
}

pub fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).expect("Invalid date in test")
}

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a history.jsonl file with the given content
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("history.jsonl"), content)
            .expect("Failed to write history.jsonl");
        self
    }

    /// Add history entries programmatically
    pub fn with_history_entries(self, entries: &[HistoryEntryBuilder]) -> Self {
        let content = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n");
        self.with_history(&content)
    }

    /// Add the log directory of `project_path` with the given agent files
    pub fn with_project(self, project_path: &str, agent_files: &[AgentFileBuilder]) -> Self {
        let project_dir =
            self.temp_dir.path().join("projects").join(encode_project_path(project_path));
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for agent_file in agent_files {
            agent_file.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for history.jsonl entries
pub struct HistoryEntryBuilder {
    display: String,
    timestamp: i64,
    session_id: String,
    project: Option<String>,
}

impl HistoryEntryBuilder {
    pub fn new() -> Self {
        Self {
            display: "Test entry".to_string(),
            timestamp: local_millis("2024-05-01 09:00:00"),
            session_id: "s1".to_string(),
            project: None,
        }
    }

    pub fn display(mut self, display: &str) -> Self {
        self.display = display.to_string();
        self
    }

    /// Set the timestamp from a local wall-clock time
    pub fn at(mut self, local: &str) -> Self {
        self.timestamp = local_millis(local);
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.project = Some(project.to_string());
        self
    }

    pub fn to_json(&self) -> String {
        let mut value = json!({
            "display": self.display,
            "timestamp": self.timestamp,
            "sessionId": self.session_id,
        });
        if let Some(project) = &self.project {
            value["project"] = json!(project);
        }
        value.to_string()
    }
}

impl Default for HistoryEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for agent conversation files
pub struct AgentFileBuilder {
    filename: String,
    lines: Vec<String>,
}

impl AgentFileBuilder {
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new() }
    }

    pub fn with_entry(mut self, entry: ConversationEntryBuilder) -> Self {
        self.lines.push(entry.to_json());
        self
    }

    /// Add a line verbatim (for malformed input)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn create_in(&self, dir: &Path) {
        fs::write(dir.join(&self.filename), self.lines.join("\n"))
            .expect("Failed to write agent file");
    }
}

/// Builder for conversation entries in agent files
pub struct ConversationEntryBuilder {
    entry_type: String,
    role: Option<String>,
    content: Value,
    timestamp: String,
    session_id: Option<String>,
}

impl ConversationEntryBuilder {
    pub fn user() -> Self {
        Self {
            entry_type: "user".to_string(),
            role: Some("user".to_string()),
            content: json!([{"type": "text", "text": "Test message"}]),
            timestamp: "2024-05-01T09:00:00Z".to_string(),
            session_id: Some("s1".to_string()),
        }
    }

    pub fn assistant() -> Self {
        Self {
            entry_type: "assistant".to_string(),
            role: Some("assistant".to_string()),
            content: json!([{"type": "text", "text": "Test response"}]),
            timestamp: "2024-05-01T09:00:01Z".to_string(),
            session_id: Some("s1".to_string()),
        }
    }

    /// Set the message text as a single text block
    pub fn text(mut self, text: &str) -> Self {
        self.content = json!([{"type": "text", "text": text}]);
        self
    }

    /// Set the content to a bare string
    pub fn string_content(mut self, text: &str) -> Self {
        self.content = json!(text);
        self
    }

    /// Set arbitrary content (blocks, strings, anything)
    pub fn content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = Some(session_id.to_string());
        self
    }

    pub fn without_session_id(mut self) -> Self {
        self.session_id = None;
        self
    }

    pub fn without_role(mut self) -> Self {
        self.role = None;
        self
    }

    pub fn to_json(&self) -> String {
        let mut message = json!({ "content": self.content });
        if let Some(role) = &self.role {
            message["role"] = json!(role);
        }

        let mut value = json!({
            "type": self.entry_type,
            "message": message,
            "timestamp": self.timestamp,
        });
        if let Some(session_id) = &self.session_id {
            value["sessionId"] = json!(session_id);
        }
        value.to_string()
    }
}

/// Helper to create a .claude directory with two projects active on 2024-05-01
pub fn realistic_claude_dir() -> TempDir {
    ClaudeDirBuilder::new()
        .with_history_entries(&[
            HistoryEntryBuilder::new().project("/work/api").session_id("s1").at("2024-05-01 09:00:00"),
            HistoryEntryBuilder::new().project("/work/api").session_id("s2").at("2024-05-01 14:00:00"),
            HistoryEntryBuilder::new().project("/work/web").session_id("s3").at("2024-05-01 11:00:00"),
            HistoryEntryBuilder::new().project("/work/old").session_id("s4").at("2024-04-30 11:00:00"),
        ])
        .with_project(
            "/work/api",
            &[
                AgentFileBuilder::new("agent-aaa.jsonl")
                    .with_entry(
                        ConversationEntryBuilder::user()
                            .text("Why is the build failing?")
                            .timestamp("2024-05-01T09:00:00Z"),
                    )
                    .with_entry(
                        ConversationEntryBuilder::assistant()
                            .text("A missing feature flag.")
                            .timestamp("2024-05-01T09:01:00Z"),
                    ),
                AgentFileBuilder::new("agent-bbb.jsonl")
                    .with_entry(
                        ConversationEntryBuilder::user()
                            .session_id("s2")
                            .text("Add pagination")
                            .timestamp("2024-05-01T14:00:00Z"),
                    )
                    .with_entry(
                        ConversationEntryBuilder::assistant()
                            .session_id("s2")
                            .text("Done.")
                            .timestamp("2024-05-01T14:05:00Z"),
                    ),
            ],
        )
        .with_project(
            "/work/web",
            &[AgentFileBuilder::new("agent-ccc.jsonl")
                .with_entry(
                    ConversationEntryBuilder::user()
                        .session_id("s3")
                        .string_content("Center this div")
                        .timestamp("2024-05-01T11:00:00Z"),
                )
                .with_entry(
                    ConversationEntryBuilder::assistant()
                        .session_id("s3")
                        .text("Use flexbox.")
                        .timestamp("2024-05-01T11:00:30Z"),
                )],
        )
        .build()
}
