#[cfg(test)]
#[path = "noop_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::models::Event;
use crate::domain::models::SpeechName;
use crate::domain::models::SpeechRecognizer;

#[derive(Default)]
pub struct NoopSpeech {}

#[async_trait]
impl SpeechRecognizer for NoopSpeech {
    fn name(&self) -> SpeechName {
        return SpeechName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        bail!("Speech recognition is not configured. Set speech = \"command\" and a speech-command");
    }

    #[allow(clippy::implicit_return)]
    async fn listen<'a>(&self, _locale: &str, _tx: &'a mpsc::UnboundedSender<Event>) -> Result<()> {
        bail!("Speech recognition is not configured");
    }
}
