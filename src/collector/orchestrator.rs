//! Day collection across all projects.
//!
//! # Error Handling Strategy
//!
//! Collection never fails. Every problem is handled at the smallest scope it
//! affects and reported through `tracing`:
//!
//! - **Missing sources**: no `history.jsonl`, no `projects/` directory or no directory
//!   for a project yields an empty result for that part of the scan
//! - **Unreadable files**: an agent file that cannot be read is skipped, its siblings
//!   are still read
//! - **Bad lines**: malformed lines and records are skipped inside the parsers
//!
//! An empty day and a day whose sources were all missing both produce an empty
//! list; only the log output tells them apart.

use std::path::PathBuf;

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::collector::project_logs::read_project;
use crate::error::CollectError;
use crate::models::{Conversation, SessionIndex};
use crate::parsers::history::sessions_for_day;
use crate::parsers::timestamp::DayWindow;
use crate::utils::{ClaudePaths, project_display_name};

/// Collects one day's conversations from a Claude data directory
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use claude_daylog::ConversationCollector;
///
/// let collector = ConversationCollector::from_claude_dir("/Users/alice/.claude");
/// let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let conversations = collector.collect_all(day);
/// println!("{} conversations", conversations.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConversationCollector {
    paths: ClaudePaths,
}

impl ConversationCollector {
    pub fn new(paths: ClaudePaths) -> Self {
        Self { paths }
    }

    pub fn from_claude_dir(claude_dir: impl Into<PathBuf>) -> Self {
        Self::new(ClaudePaths::new(claude_dir))
    }

    pub fn paths(&self) -> &ClaudePaths {
        &self.paths
    }

    /// Sessions seen per project on `date`, from `history.jsonl`
    pub fn sessions_for_day(&self, date: NaiveDate) -> SessionIndex {
        sessions_for_day(&self.paths.history_file, &DayWindow::new(date))
    }

    /// Collect every conversation of `date`, ordered by start time
    pub fn collect_all(&self, date: NaiveDate) -> Vec<Conversation> {
        let index = self.sessions_for_day(date);
        self.collect_with_index(&index, date)
    }

    /// Collect conversations for the projects listed in `index`
    ///
    /// The index only decides which project directories are scanned. Messages
    /// are selected by the day window alone, whether or not their session id
    /// appears in the index.
    pub fn collect_with_index(&self, index: &SessionIndex, date: NaiveDate) -> Vec<Conversation> {
        let window = DayWindow::new(date);

        tracing::info!("Found conversations in {} projects", index.len());
        for (project, sessions) in index.iter() {
            tracing::info!("  - {}: {} sessions", project_display_name(project), sessions.len());
        }

        if !index.is_empty() && !self.paths.projects_dir.is_dir() {
            tracing::warn!(
                "{}",
                CollectError::MissingSource {
                    what: "projects directory",
                    path: self.paths.projects_dir.clone(),
                }
            );
            return Vec::new();
        }

        let projects: Vec<&str> = index.projects().collect();
        let per_project: Vec<Vec<Conversation>> = projects
            .par_iter()
            .map(|project| read_project(&self.paths.projects_dir, project, &window))
            .collect();

        let mut conversations: Vec<Conversation> = per_project.into_iter().flatten().collect();
        sort_by_start_time(&mut conversations);

        tracing::debug!(
            "Collected {} conversations for {}",
            conversations.len(),
            window.date().format("%Y-%m-%d")
        );

        conversations
    }
}

/// Stable sort by start time; conversations without one sort first
pub fn sort_by_start_time(conversations: &mut [Conversation]) {
    conversations.sort_by_key(|c| c.start_time);
}
