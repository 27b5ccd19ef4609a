use serde_json::Value;

use crate::models::{ContentPart, MessageContent};

const CONTENT_TYPE_TEXT: &str = "text";

/// Flatten message content into a single text blob
///
/// Plain strings are returned unchanged. For part lists, `text` blocks and bare
/// strings contribute in order, joined by newlines; tool calls, thinking blocks,
/// images and empty text blocks contribute nothing.
///
/// # Examples
///
/// ```
/// use claude_daylog::models::MessageContent;
/// use claude_daylog::parsers::content::extract_text;
///
/// let content: MessageContent =
///     serde_json::from_str(r#"[{"type":"text","text":"a"}, "b"]"#).unwrap();
/// assert_eq!(extract_text(&content), "a\nb");
/// ```
pub fn extract_text(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Parts(parts) => {
            let fragments: Vec<&str> = parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text(text) => Some(text.as_str()),
                    ContentPart::Block { kind: Some(kind), text: Some(text) }
                        if kind == CONTENT_TYPE_TEXT && !text.is_empty() =>
                    {
                        Some(text.as_str())
                    }
                    ContentPart::Block { .. } | ContentPart::Unsupported => None,
                })
                .collect();
            fragments.join("\n")
        }
    }
}

/// Same as [`extract_text`], starting from an arbitrary JSON value.
/// Anything that is neither a string nor a list yields an empty string.
pub fn extract_text_from_value(value: &Value) -> String {
    match serde_json::from_value::<MessageContent>(value.clone()) {
        Ok(content) => extract_text(&content),
        Err(_) => String::new(),
    }
}
