use super::ChatRequest;
use super::Language;

pub enum Action {
    ChatRequest(ChatRequest),
    VoiceStart(Language),
    VoiceStop(),
}
