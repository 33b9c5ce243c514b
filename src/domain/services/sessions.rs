#[cfg(test)]
#[path = "sessions_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use chrono::Utc;

use crate::domain::models::ChatSession;
use crate::domain::models::StorageBox;
use crate::domain::models::CHAT_HISTORY_KEY;

pub const MAX_SESSIONS: usize = 20;

/// Chat history kept as one JSON array in storage, most recently touched
/// session first.
pub struct Sessions {
    storage: StorageBox,
}

impl Sessions {
    pub fn new(storage: StorageBox) -> Sessions {
        return Sessions { storage };
    }

    pub fn list(&self) -> Result<Vec<ChatSession>> {
        let payload = match self.storage.get_item(CHAT_HISTORY_KEY)? {
            Some(payload) => payload,
            None => return Ok(vec![]),
        };

        match serde_json::from_str::<Vec<ChatSession>>(&payload) {
            Ok(sessions) => return Ok(sessions),
            Err(err) => {
                tracing::warn!(error = ?err, "Stored chat history is malformed, ignoring it");
                return Ok(vec![]);
            }
        }
    }

    pub fn load(&self, id: &str) -> Result<ChatSession> {
        if let Some(session) = self.list()?.into_iter().find(|e| return e.id == id) {
            return Ok(session);
        }

        bail!(format!("No session found for id {id}"));
    }

    /// Inserts or replaces the session at the most recently used position,
    /// evicting the oldest entries past the cap.
    pub fn save(&self, session: ChatSession) -> Result<()> {
        let mut sessions = self.list()?;
        sessions.retain(|e| return e.id != session.id);
        sessions.insert(0, session);
        sessions.truncate(MAX_SESSIONS);

        return self.write(&sessions);
    }

    /// Returns whether a session was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut sessions = self.list()?;
        let len = sessions.len();
        sessions.retain(|e| return e.id != id);
        if sessions.len() == len {
            return Ok(false);
        }

        self.write(&sessions)?;
        return Ok(true);
    }

    pub fn delete_all(&self) -> Result<()> {
        return self.storage.remove_item(CHAT_HISTORY_KEY);
    }

    /// Ids come from the current time in milliseconds, bumped until unused.
    pub fn create_id(&self) -> Result<String> {
        let existing = self
            .list()?
            .into_iter()
            .filter_map(|e| return e.id.parse::<i64>().ok())
            .collect::<Vec<i64>>();

        let mut id = Utc::now().timestamp_millis();
        while existing.contains(&id) {
            id += 1;
        }

        return Ok(id.to_string());
    }

    fn write(&self, sessions: &[ChatSession]) -> Result<()> {
        let payload = serde_json::to_string(sessions)?;
        return self.storage.set_item(CHAT_HISTORY_KEY, &payload);
    }
}
