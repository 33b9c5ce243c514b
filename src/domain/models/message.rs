#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Role;

/// Shown in place of an assistant reply whenever the chat query fails.
pub const APOLOGY_MESSAGE: &str = "I apologize, but I encountered an error. Please try again.";

fn is_false(val: &bool) -> bool {
    return !*val;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Round trip of the chat query in milliseconds. Only set on assistant
    /// replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<u64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
}

impl ChatMessage {
    pub fn user(content: &str) -> ChatMessage {
        return ChatMessage {
            role: Role::User,
            content: content.to_string(),
            timestamp: Utc::now(),
            response_time: None,
            error: false,
        };
    }

    pub fn assistant(content: &str, response_time: Duration) -> ChatMessage {
        return ChatMessage {
            role: Role::Assistant,
            content: content.to_string(),
            timestamp: Utc::now(),
            response_time: Some(response_time.as_millis() as u64),
            error: false,
        };
    }

    pub fn apology(response_time: Duration) -> ChatMessage {
        let mut msg = ChatMessage::assistant(APOLOGY_MESSAGE, response_time);
        msg.error = true;
        return msg;
    }

    pub fn is_error(&self) -> bool {
        return self.error;
    }

    /// Response time formatted for bubble titles, e.g. `1.2s`.
    pub fn response_time_label(&self) -> Option<String> {
        return self
            .response_time
            .map(|millis| return format!("{:.1}s", millis as f64 / 1000.0));
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        return wrap_text(&self.content, line_max_width);
    }
}

/// Word wraps on character counts. Words longer than a line are split.
pub fn wrap_text(text: &str, line_max_width: usize) -> Vec<String> {
    let line_max_width = line_max_width.max(1);
    let mut lines: Vec<String> = Vec::new();

    for full_line in text.replace('\t', "  ").split('\n') {
        if full_line.trim().is_empty() {
            lines.push(" ".to_string());
            continue;
        }

        let mut char_count = 0;
        let mut current_lines: Vec<String> = vec![];

        for word in split_long_words(full_line, line_max_width) {
            let word_len = word.chars().count();
            if word_len + char_count + 1 > line_max_width && !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
                current_lines = vec![word];
                char_count = word_len + 1;
            } else {
                current_lines.push(word);
                char_count += word_len + 1;
            }
        }
        if !current_lines.is_empty() {
            lines.push(current_lines.join(" ").trim_end().to_string());
        }
    }

    return lines;
}

fn split_long_words(line: &str, line_max_width: usize) -> Vec<String> {
    return line
        .split(' ')
        .flat_map(|word| {
            let chars = word.chars().collect::<Vec<char>>();
            if chars.len() <= line_max_width {
                return vec![word.to_string()];
            }

            return chars
                .chunks(line_max_width)
                .map(|chunk| return chunk.iter().collect::<String>())
                .collect::<Vec<String>>();
        })
        .collect();
}
