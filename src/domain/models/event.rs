use anyhow::Result;
use tui_textarea::Input;

use super::ChatResponse;
use super::VoiceEvent;

pub enum Event {
    ChatReply(Result<ChatResponse>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLL(),
    KeyboardCTRLN(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
    Voice(VoiceEvent),
}
