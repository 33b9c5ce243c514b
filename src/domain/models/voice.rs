use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;

use super::Event;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoiceEvent {
    Started,
    Result { transcript: String, is_final: bool },
    Error(String),
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SpeechName {
    Command,
    None,
}

impl SpeechName {
    pub fn parse(text: String) -> Option<SpeechName> {
        return SpeechName::iter().find(|e| return e.to_string() == text);
    }
}

#[async_trait]
pub trait SpeechRecognizer {
    fn name(&self) -> SpeechName;

    /// Used before listening to verify the recognizer is usable at all.
    async fn health_check(&self) -> Result<()>;

    /// Captures speech in the given locale, sending `VoiceEvent`s through the
    /// channel as they arrive. `Started` is sent first and `Ended` last when
    /// capture finishes on its own. Stopping early is done by dropping the
    /// future.
    async fn listen<'a>(&self, locale: &str, tx: &'a mpsc::UnboundedSender<Event>) -> Result<()>;
}

pub type SpeechBox = Box<dyn SpeechRecognizer + Send + Sync>;
