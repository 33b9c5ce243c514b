use anyhow::Result;
use tokio::sync::mpsc;

use super::CommandSpeech;
use crate::domain::models::Event;
use crate::domain::models::SpeechRecognizer;
use crate::domain::models::VoiceEvent;

fn with_command(command: &str) -> CommandSpeech {
    return CommandSpeech {
        command: command.to_string(),
    };
}

fn drain(rx: &mut mpsc::UnboundedReceiver<Event>) -> Vec<VoiceEvent> {
    let mut events = vec![];
    while let Ok(event) = rx.try_recv() {
        if let Event::Voice(voice) = event {
            events.push(voice);
        }
    }

    return events;
}

#[tokio::test]
async fn it_fails_health_check_without_command() {
    assert!(with_command("  ").health_check().await.is_err());
    assert!(with_command("echo hi").health_check().await.is_ok());
}

#[tokio::test]
async fn it_emits_transcripts() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let speech = with_command("echo '~Kedar'; echo; echo 'Kedarnath yatra'");

    speech.listen("en-IN", &tx).await?;

    assert_eq!(
        drain(&mut rx),
        vec![
            VoiceEvent::Started,
            VoiceEvent::Result {
                transcript: "Kedar".to_string(),
                is_final: false,
            },
            VoiceEvent::Result {
                transcript: "Kedarnath yatra".to_string(),
                is_final: true,
            },
            VoiceEvent::Ended,
        ]
    );

    return Ok(());
}

#[tokio::test]
async fn it_passes_locale() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let speech = with_command("echo \"$DEEP_SHIVA_SPEECH_LOCALE\"");

    speech.listen("hi-IN", &tx).await?;

    assert_eq!(
        drain(&mut rx)[1],
        VoiceEvent::Result {
            transcript: "hi-IN".to_string(),
            is_final: true,
        }
    );

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_non_zero_exit() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let speech = with_command("exit 3");

    assert!(speech.listen("en-IN", &tx).await.is_err());
    assert_eq!(drain(&mut rx), vec![VoiceEvent::Started]);
}
