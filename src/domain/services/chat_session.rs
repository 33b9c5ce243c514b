#[cfg(test)]
#[path = "chat_session_test.rs"]
mod tests;

use std::time::Duration;
use std::time::Instant;

use anyhow::Result;

use super::Sessions;
use crate::domain::models::ChatApi;
use crate::domain::models::ChatMessage;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;
use crate::domain::models::ChatSession;
use crate::domain::models::Language;
use crate::domain::models::VoiceEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingResponse,
}

/// Owns the visible transcript and binds it to at most one stored session.
pub struct ChatSessionManager {
    sessions: Sessions,
    messages: Vec<ChatMessage>,
    input: String,
    active_session_id: Option<String>,
    state: ChatState,
    request_started: Option<Instant>,
    listening: bool,
    interim_transcript: String,
    save_debounce: Duration,
    save_deadline: Option<Instant>,
    user_id: String,
    language: Language,
}

impl ChatSessionManager {
    pub fn new(
        sessions: Sessions,
        user_id: &str,
        language: Language,
        save_debounce: Duration,
    ) -> ChatSessionManager {
        return ChatSessionManager {
            sessions,
            messages: vec![],
            input: "".to_string(),
            active_session_id: None,
            state: ChatState::Idle,
            request_started: None,
            listening: false,
            interim_transcript: "".to_string(),
            save_debounce,
            save_deadline: None,
            user_id: user_id.to_string(),
            language,
        };
    }

    pub fn sessions(&self) -> &Sessions {
        return &self.sessions;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        return &self.messages;
    }

    pub fn input(&self) -> &str {
        return &self.input;
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn active_session_id(&self) -> Option<&str> {
        return self.active_session_id.as_deref();
    }

    pub fn state(&self) -> ChatState {
        return self.state;
    }

    pub fn is_awaiting_response(&self) -> bool {
        return self.state == ChatState::AwaitingResponse;
    }

    pub fn is_listening(&self) -> bool {
        return self.listening;
    }

    pub fn interim_transcript(&self) -> &str {
        return &self.interim_transcript;
    }

    pub fn has_pending_save(&self) -> bool {
        return self.save_deadline.is_some();
    }

    pub fn language(&self) -> Language {
        return self.language;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Appends the user message and returns the request to send, or `None`
    /// when the text is blank, a reply is pending or voice capture is active.
    pub fn submit(&mut self, text: &str) -> Option<ChatRequest> {
        let message = text.trim();
        if message.is_empty() || self.is_awaiting_response() || self.listening {
            return None;
        }

        self.messages.push(ChatMessage::user(message));
        self.input = "".to_string();
        self.state = ChatState::AwaitingResponse;
        self.request_started = Some(Instant::now());

        return Some(ChatRequest {
            message: message.to_string(),
            user_id: self.user_id.clone(),
            language: self.language,
        });
    }

    /// Records the outcome of the request produced by `submit`. Failures of
    /// any kind become the apology message.
    pub fn complete(&mut self, result: Result<ChatResponse>) -> bool {
        if !self.is_awaiting_response() {
            tracing::warn!("Received a chat reply with no request in flight");
            return false;
        }

        let elapsed = self
            .request_started
            .take()
            .map(|started| return started.elapsed())
            .unwrap_or_default();

        match result {
            Ok(res) => {
                tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "Chat reply received");
                self.messages.push(ChatMessage::assistant(&res.response, elapsed));
            }
            Err(err) => {
                tracing::error!(error = ?err, "Chat query failed");
                self.messages.push(ChatMessage::apology(elapsed));
            }
        }

        self.state = ChatState::Idle;
        self.save_deadline = Some(Instant::now() + self.save_debounce);

        return true;
    }

    /// Submit, query and complete in one call.
    pub async fn send(&mut self, api: &(dyn ChatApi + Send + Sync), text: &str) -> bool {
        let req = match self.submit(text) {
            Some(req) => req,
            None => return false,
        };

        let result = api.query(&req).await;
        return self.complete(result);
    }

    /// Writes the transcript under the active session id, minting one when
    /// the transcript was never saved. Empty transcripts are not stored.
    pub fn persist(&mut self) -> Result<()> {
        self.save_deadline = None;
        if self.messages.is_empty() {
            return Ok(());
        }

        let id = match &self.active_session_id {
            Some(id) => id.to_string(),
            None => {
                let id = self.sessions.create_id()?;
                self.active_session_id = Some(id.clone());
                id
            }
        };

        tracing::debug!(id = %id, messages = self.messages.len(), "Saving chat session");
        return self.sessions.save(ChatSession::new(&id, &self.messages));
    }

    /// Runs the debounced save once its deadline has passed. Returns whether a
    /// save happened.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        match self.save_deadline {
            Some(deadline) if now >= deadline => {
                self.persist()?;
                return Ok(true);
            }
            _ => return Ok(false),
        }
    }

    /// Saves immediately if a debounced save is waiting.
    pub fn flush(&mut self) -> Result<()> {
        if self.has_pending_save() {
            self.persist()?;
        }

        return Ok(());
    }

    /// Refused while a reply is pending.
    pub fn start_new_chat(&mut self) -> Result<bool> {
        if self.is_awaiting_response() {
            return Ok(false);
        }

        self.persist()?;
        self.messages.clear();
        self.active_session_id = None;

        return Ok(true);
    }

    /// Replaces the transcript with a stored session after writing any pending
    /// save. Loading the active session keeps its in-memory transcript, which
    /// is never older than storage. Unknown ids are an error and leave
    /// everything alone.
    pub fn load_chat(&mut self, id: &str) -> Result<bool> {
        if self.is_awaiting_response() {
            return Ok(false);
        }

        let session = self.sessions.load(id)?;
        self.flush()?;
        if self.active_session_id.as_deref() == Some(id) {
            return Ok(true);
        }

        self.messages = session.messages;
        self.active_session_id = Some(session.id);

        return Ok(true);
    }

    /// Returns whether anything was removed. Deleting the active session also
    /// clears the transcript, which is refused while a reply is pending.
    pub fn delete_chat(&mut self, id: &str) -> Result<bool> {
        let is_active = self.active_session_id.as_deref() == Some(id);
        if is_active && self.is_awaiting_response() {
            return Ok(false);
        }

        let deleted = self.sessions.delete(id)?;
        if is_active {
            self.messages.clear();
            self.active_session_id = None;
            self.save_deadline = None;
        }

        return Ok(deleted || is_active);
    }

    /// Returns false when already listening.
    pub fn start_listening(&mut self) -> bool {
        if self.listening {
            return false;
        }

        self.listening = true;
        self.interim_transcript = "".to_string();
        return true;
    }

    /// Returns false when not listening.
    pub fn stop_listening(&mut self) -> bool {
        if !self.listening {
            return false;
        }

        self.listening = false;
        self.interim_transcript = "".to_string();
        return true;
    }

    pub fn handle_voice_event(&mut self, event: VoiceEvent) {
        if !self.listening {
            return;
        }

        match event {
            VoiceEvent::Started => {}
            VoiceEvent::Result {
                transcript,
                is_final,
            } => {
                if is_final {
                    self.input = transcript;
                    self.interim_transcript = "".to_string();
                } else {
                    self.interim_transcript = transcript;
                }
            }
            VoiceEvent::Error(err) => {
                tracing::warn!(error = %err, "Speech recognition failed");
                self.stop_listening();
            }
            VoiceEvent::Ended => {
                self.stop_listening();
            }
        }
    }
}
