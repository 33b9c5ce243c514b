#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::ChatMessage;
use super::Role;

const TITLE_MAX_CHARS: usize = 50;
pub const UNTITLED_SESSION: &str = "New Chat";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub messages: Vec<ChatMessage>,
    pub last_modified: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(id: &str, messages: &[ChatMessage]) -> ChatSession {
        return ChatSession {
            id: id.to_string(),
            title: ChatSession::title_from_messages(messages),
            messages: messages.to_vec(),
            last_modified: Utc::now(),
        };
    }

    /// First user message cut to 50 characters, followed by an ellipsis.
    pub fn title_from_messages(messages: &[ChatMessage]) -> String {
        let first = messages.iter().find(|msg| return msg.role == Role::User);
        if let Some(msg) = first {
            let truncated = msg.content.chars().take(TITLE_MAX_CHARS).collect::<String>();
            return format!("{truncated}...");
        }

        return UNTITLED_SESSION.to_string();
    }
}
