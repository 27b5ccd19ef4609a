use chrono::NaiveDateTime;

use crate::models::{Conversation, Role};
use crate::utils::project_display_name;

/// Messages longer than this many characters are cut in the summary feed
pub const MAX_MESSAGE_CHARS: usize = 3000;

const RULE_WIDTH: usize = 50;

/// Render conversations as a flat text feed for an LLM prompt
///
/// Each conversation gets a header (project name, time range, message count)
/// followed by its messages. The output is raw concatenated text with no
/// escaping.
pub fn format_for_summary(conversations: &[Conversation]) -> String {
    let mut parts: Vec<String> = Vec::new();

    for conversation in conversations {
        parts.push(format!("\n## Project: {}", project_display_name(&conversation.project)));
        parts.push(format!(
            "Time: {} ~ {}",
            format_clock(conversation.start_time),
            format_clock(conversation.end_time)
        ));
        parts.push(format!("Messages: {}", conversation.messages.len()));
        parts.push("-".repeat(RULE_WIDTH));

        for message in &conversation.messages {
            parts.push(format!("\n### {}:", role_label(message.role)));
            parts.push(truncate_chars(&message.content, MAX_MESSAGE_CHARS).to_string());
        }
    }

    parts.join("\n")
}

fn format_clock(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "N/A".to_string())
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "User",
        Role::Assistant => "Claude",
    }
}

/// First `max_chars` characters of `s`
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
