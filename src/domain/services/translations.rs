#[cfg(test)]
#[path = "translations_test.rs"]
mod tests;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use serde_json::Value;
use strum::IntoEnumIterator;

use crate::domain::models::Language;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Locales;

static TABLES: Lazy<HashMap<Language, Value>> = Lazy::new(|| {
    return Language::iter()
        .map(|language| {
            return (language, load_table(language));
        })
        .collect();
});

fn load_table(language: Language) -> Value {
    let file_name = format!("{}.json", language.code());
    let file = match Locales::get(&file_name) {
        Some(file) => file,
        None => {
            tracing::error!(file_name = %file_name, "Missing translation table");
            return Value::Null;
        }
    };

    match serde_json::from_slice(&file.data) {
        Ok(value) => return value,
        Err(err) => {
            tracing::error!(file_name = %file_name, error = ?err, "Failed to parse translation table");
            return Value::Null;
        }
    }
}

/// Empty strings are treated as untranslated.
fn resolve<'a>(table: &'a Value, key: &str) -> Option<&'a str> {
    let mut node = table;
    for segment in key.split('.') {
        node = node.get(segment)?;
    }

    return node.as_str().filter(|text| return !text.is_empty());
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    return resolve(TABLES.get(&language)?, key);
}

/// Resolves dotted keys such as `home.title` against the embedded tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Translator {
        return Translator { language };
    }

    pub fn language(&self) -> Language {
        return self.language;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Active language, then `fallback`, then English, then the key itself.
    /// Keys that point at a nested table or an empty string count as missing.
    pub fn t(&self, key: &str, fallback: Option<&str>) -> String {
        if let Some(text) = lookup(self.language, key) {
            return text.to_string();
        }
        if let Some(fallback) = fallback {
            return fallback.to_string();
        }
        if let Some(text) = lookup(Language::En, key) {
            return text.to_string();
        }

        return key.to_string();
    }
}
