#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumVariantNames,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    /// Garhwali.
    Ga,
}

impl Language {
    pub fn parse(text: &str) -> Option<Language> {
        let code = text.trim().to_lowercase();
        return Language::iter().find(|e| return e.to_string() == code);
    }

    pub fn code(&self) -> String {
        return self.to_string();
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => return "English",
            Language::Hi => return "हिंदी",
            Language::Ga => return "गढ़वळी",
        }
    }

    /// Locale handed to speech recognition. Garhwali has no recognizer of its
    /// own and is captured as Hindi.
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Language::En => return "en-IN",
            Language::Hi => return "hi-IN",
            Language::Ga => return "hi-IN",
        }
    }
}
