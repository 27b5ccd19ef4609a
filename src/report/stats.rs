use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Conversation;

/// Aggregate counts over a day's conversations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_conversations: usize,
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    /// Distinct project paths, sorted
    pub projects: Vec<String>,
    pub project_count: usize,
}

pub fn statistics(conversations: &[Conversation]) -> Statistics {
    let total_messages: usize = conversations.iter().map(|c| c.messages.len()).sum();
    let user_messages: usize = conversations.iter().map(Conversation::user_message_count).sum();

    let projects: Vec<String> = conversations
        .iter()
        .map(|c| c.project.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    Statistics {
        total_conversations: conversations.len(),
        total_messages,
        user_messages,
        assistant_messages: total_messages - user_messages,
        project_count: projects.len(),
        projects,
    }
}
