#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use std::process::Stdio;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::process::Command;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Event;
use crate::domain::models::SpeechName;
use crate::domain::models::SpeechRecognizer;
use crate::domain::models::VoiceEvent;

const LOCALE_ENV: &str = "DEEP_SHIVA_SPEECH_LOCALE";
const INTERIM_PREFIX: char = '~';

/// Runs a user supplied shell command as the recognizer. The recognition
/// locale is passed in `DEEP_SHIVA_SPEECH_LOCALE`. Every stdout line is a
/// final transcript, unless prefixed with `~` which marks an interim one.
pub struct CommandSpeech {
    command: String,
}

impl Default for CommandSpeech {
    fn default() -> CommandSpeech {
        return CommandSpeech {
            command: Config::get(ConfigKey::SpeechCommand),
        };
    }
}

fn parse_line(line: &str) -> Option<VoiceEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(interim) = line.strip_prefix(INTERIM_PREFIX) {
        return Some(VoiceEvent::Result {
            transcript: interim.trim().to_string(),
            is_final: false,
        });
    }

    return Some(VoiceEvent::Result {
        transcript: line.to_string(),
        is_final: true,
    });
}

#[async_trait]
impl SpeechRecognizer for CommandSpeech {
    fn name(&self) -> SpeechName {
        return SpeechName::Command;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.command.trim().is_empty() {
            bail!("No speech-command configured");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn listen<'a>(&self, locale: &str, tx: &'a mpsc::UnboundedSender<Event>) -> Result<()> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .env(LOCALE_ENV, locale)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        tracing::debug!(locale, "Listening for speech");
        tx.send(Event::Voice(VoiceEvent::Started))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| return anyhow!("Speech command has no stdout"))?;
        let mut lines = BufReader::new(stdout).lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(event) = parse_line(&line) {
                tx.send(Event::Voice(event))?;
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            bail!(format!("Speech command exited with {status}"));
        }

        tx.send(Event::Voice(VoiceEvent::Ended))?;
        return Ok(());
    }
}
