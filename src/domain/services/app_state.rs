#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::time::Instant;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::BubbleList;
use super::BubbleSource;
use super::ChatSessionManager;
use super::Preferences;
use super::Scroll;
use super::Translator;
use crate::domain::models::Action;
use crate::domain::models::ChatResponse;
use crate::domain::models::Language;
use crate::domain::models::SlashCommand;
use crate::domain::models::VoiceEvent;

/// Text from the app itself, shown after the message it followed.
struct Notice {
    after: usize,
    text: String,
}

pub struct AppState {
    pub bubble_list: BubbleList,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub manager: ChatSessionManager,
    pub preferences: Preferences,
    pub scroll: Scroll,
    pub translator: Translator,
    notices: Vec<Notice>,
}

impl AppState {
    pub fn new(manager: ChatSessionManager, preferences: Preferences) -> AppState {
        let translator = Translator::new(manager.language());
        return AppState {
            bubble_list: BubbleList::new(),
            last_known_height: 0,
            last_known_width: 0,
            manager,
            preferences,
            scroll: Scroll::default(),
            translator,
            notices: vec![],
        };
    }

    pub fn t(&self, key: &str) -> String {
        return self.translator.t(key, None);
    }

    pub fn notices(&self) -> Vec<&str> {
        return self
            .notices
            .iter()
            .map(|notice| return notice.text.as_str())
            .collect();
    }

    pub fn add_notice(&mut self, text: &str) {
        self.notices.push(Notice {
            after: self.manager.messages().len(),
            text: text.to_string(),
        });
        self.sync_dependants();
    }

    fn replace_notices(&mut self, text: &str) {
        self.notices.clear();
        self.add_notice(text);
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn submit(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if let Some(req) = self.manager.submit(text) {
            tx.send(Action::ChatRequest(req))?;
            self.sync_dependants();
            return Ok(true);
        }

        return Ok(false);
    }

    pub fn handle_chat_reply(&mut self, res: Result<ChatResponse>) {
        self.manager.complete(res);
        self.sync_dependants();
    }

    pub fn toggle_voice(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.manager.stop_listening() {
            tx.send(Action::VoiceStop())?;
            self.add_notice(&self.t("chat.voiceStopped"));
            return Ok(());
        }

        self.manager.start_listening();
        tx.send(Action::VoiceStart(self.manager.language()))?;
        self.add_notice(&self.t("chat.listening"));

        return Ok(());
    }

    pub fn handle_voice_event(&mut self, event: VoiceEvent) {
        if let VoiceEvent::Error(err) = &event {
            if self.manager.is_listening() {
                self.add_notice(&format!("{}: {err}", self.t("common.error")));
            }
        }

        self.manager.handle_voice_event(event);
    }

    /// Runs any due debounced save. Storage failures are reported in the
    /// transcript rather than ending the session.
    pub fn tick(&mut self) {
        if let Err(err) = self.manager.tick(Instant::now()) {
            tracing::error!(error = ?err, "Failed to save chat session");
            self.add_notice(&format!("{}: {err}", self.t("common.error")));
        }
    }

    pub fn new_chat(&mut self) -> Result<()> {
        if self.manager.start_new_chat()? {
            self.replace_notices(&self.t("chat.newChat"));
        } else {
            self.add_notice(&self.t("chat.busy"));
        }

        return Ok(());
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.preferences.set_language(language)?;
        self.translator.set_language(language);
        self.manager.set_language(language);
        self.add_notice(&format!(
            "{} {}",
            self.t("language.changed"),
            language.display_name()
        ));

        return Ok(());
    }

    fn history(&mut self) -> Result<()> {
        let sessions = self.manager.sessions().list()?;
        if sessions.is_empty() {
            self.add_notice(&self.t("sessions.empty"));
            return Ok(());
        }

        let messages_label = self.t("sessions.messages");
        let lines = sessions
            .iter()
            .map(|session| {
                return format!(
                    "- {} {} ({} {messages_label})",
                    session.id,
                    session.title,
                    session.messages.len()
                );
            })
            .collect::<Vec<String>>();

        self.add_notice(&format!("{}:\n{}", self.t("sessions.title"), lines.join("\n")));
        return Ok(());
    }

    fn load_chat(&mut self, id: &str) {
        match self.manager.load_chat(id) {
            Ok(true) => self.replace_notices(&self.t("chat.loaded")),
            Ok(false) => self.add_notice(&self.t("chat.busy")),
            Err(err) => {
                tracing::debug!(error = ?err, id, "Could not load chat");
                self.add_notice(&self.t("chat.notFound"));
            }
        }
    }

    fn delete_chat(&mut self, id: &str) -> Result<()> {
        let was_active = self.manager.active_session_id() == Some(id);
        if was_active && self.manager.is_awaiting_response() {
            self.add_notice(&self.t("chat.busy"));
            return Ok(());
        }

        if !self.manager.delete_chat(id)? {
            self.add_notice(&self.t("chat.notFound"));
        } else if was_active {
            self.replace_notices(&self.t("chat.deleted"));
        } else {
            self.add_notice(&self.t("chat.deleted"));
        }

        return Ok(());
    }

    /// Returns `(should_break, should_continue)` for the UI loop. Input that is
    /// not a command yields `(false, false)` and should be sent as a message.
    pub fn handle_slash_commands(
        &mut self,
        input: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<(bool, bool)> {
        let command = match SlashCommand::parse(input) {
            Some(command) => command,
            None => return Ok((false, false)),
        };

        if command.is_quit() {
            return Ok((true, false));
        }

        if command.is_new_chat() {
            self.new_chat()?;
        } else if command.is_history() {
            self.history()?;
        } else if command.is_load() {
            match command.first_arg() {
                Some(id) => self.load_chat(id),
                None => self.add_notice(&self.t("chat.help")),
            }
        } else if command.is_delete() {
            match command.first_arg() {
                Some(id) => self.delete_chat(id)?,
                None => self.add_notice(&self.t("chat.help")),
            }
        } else if command.is_language() {
            match command.first_arg().and_then(Language::parse) {
                Some(language) => self.set_language(language)?,
                None => self.add_notice(&self.t("language.unknown")),
            }
        } else if command.is_voice() {
            self.toggle_voice(tx)?;
        } else if command.is_help() {
            self.add_notice(&self.t("chat.help"));
        }

        return Ok((false, true));
    }

    pub fn sync_dependants(&mut self) {
        let greeting = self.t("chat.greeting");
        let messages = self.manager.messages();

        let mut sources: Vec<BubbleSource> = vec![];
        if messages.is_empty() {
            sources.push(BubbleSource::Greeting(&greeting));
        }
        for idx in 0..=messages.len() {
            sources.extend(
                self.notices
                    .iter()
                    .filter(|notice| return notice.after == idx)
                    .map(|notice| return BubbleSource::Notice(&notice.text)),
            );
            if let Some(message) = messages.get(idx) {
                sources.push(BubbleSource::Message(message));
            }
        }

        self.bubble_list
            .set_sources(&sources, self.last_known_width as usize);
        self.scroll.set_state(
            u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX),
            self.last_known_height,
        );
    }
}
