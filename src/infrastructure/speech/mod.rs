pub mod command;
pub mod noop;

use anyhow::Result;

use crate::domain::models::SpeechBox;
use crate::domain::models::SpeechName;

pub struct SpeechManager {}

impl SpeechManager {
    pub fn get(name: SpeechName) -> Result<SpeechBox> {
        if name == SpeechName::Command {
            return Ok(Box::<command::CommandSpeech>::default());
        }

        return Ok(Box::<noop::NoopSpeech>::default());
    }
}
