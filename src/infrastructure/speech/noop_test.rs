use tokio::sync::mpsc;

use super::NoopSpeech;
use crate::domain::models::Event;
use crate::domain::models::SpeechName;
use crate::domain::models::SpeechRecognizer;
use crate::infrastructure::speech::SpeechManager;

#[tokio::test]
async fn it_is_never_healthy() {
    assert!(NoopSpeech::default().health_check().await.is_err());
}

#[tokio::test]
async fn it_refuses_to_listen() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    let err = NoopSpeech::default()
        .listen("en-IN", &tx)
        .await
        .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"Speech recognition is not configured");
    assert!(rx.try_recv().is_err());
}

#[test]
fn it_is_picked_for_none() -> anyhow::Result<()> {
    assert_eq!(SpeechManager::get(SpeechName::None)?.name(), SpeechName::None);
    assert_eq!(
        SpeechManager::get(SpeechName::Command)?.name(),
        SpeechName::Command
    );

    return Ok(());
}
