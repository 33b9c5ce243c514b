#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::models::Action;
use crate::domain::models::ChatApi;
use crate::domain::models::ChatRequest;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::models::SpeechRecognizer;
use crate::domain::models::VoiceEvent;

fn chat_request(
    api: Arc<dyn ChatApi + Send + Sync>,
    req: ChatRequest,
    tx: mpsc::UnboundedSender<Event>,
) -> JoinHandle<Result<()>> {
    return tokio::spawn(async move {
        tracing::debug!(language = %req.language, "Sending chat query");
        let res = api.query(&req).await;
        tx.send(Event::ChatReply(res))?;

        return Ok(());
    });
}

fn voice_start(
    speech: Arc<dyn SpeechRecognizer + Send + Sync>,
    language: Language,
    tx: mpsc::UnboundedSender<Event>,
) -> JoinHandle<Result<()>> {
    return tokio::spawn(async move {
        let locale = language.speech_locale();
        if let Err(err) = speech.health_check().await {
            tx.send(Event::Voice(VoiceEvent::Error(err.to_string())))?;
            return Ok(());
        }

        if let Err(err) = speech.listen(locale, &tx).await {
            tx.send(Event::Voice(VoiceEvent::Error(err.to_string())))?;
        }

        return Ok(());
    });
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs until the sending half of `rx` is dropped.
    pub async fn start(
        api: Arc<dyn ChatApi + Send + Sync>,
        speech: Arc<dyn SpeechRecognizer + Send + Sync>,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        // Lazy default.
        let mut voice_worker: JoinHandle<Result<()>> = tokio::spawn(async {
            return Ok(());
        });

        while let Some(action) = rx.recv().await {
            match action {
                Action::ChatRequest(req) => {
                    chat_request(api.clone(), req, tx.clone());
                }
                Action::VoiceStart(language) => {
                    voice_worker.abort();
                    voice_worker = voice_start(speech.clone(), language, tx.clone());
                }
                // The UI has already left listening, so nothing is sent back.
                // A late Ended here would cancel a capture started right after.
                Action::VoiceStop() => {
                    voice_worker.abort();
                }
            }
        }

        voice_worker.abort();
        return Ok(());
    }
}
