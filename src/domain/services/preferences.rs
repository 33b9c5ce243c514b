#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;

use std::collections::BTreeSet;

use anyhow::Result;

use crate::domain::models::Language;
use crate::domain::models::StorageBox;
use crate::domain::models::FAVORITES_KEY;
use crate::domain::models::LANGUAGE_KEY;

/// User preferences that outlive a single run: the selected language and
/// favourite artisan products.
pub struct Preferences {
    storage: StorageBox,
}

impl Preferences {
    pub fn new(storage: StorageBox) -> Preferences {
        return Preferences { storage };
    }

    /// Falls back to English when nothing valid is stored.
    pub fn language(&self) -> Language {
        match self.storage.get_item(LANGUAGE_KEY) {
            Ok(Some(code)) => return Language::parse(&code).unwrap_or_default(),
            Ok(None) => return Language::default(),
            Err(err) => {
                tracing::warn!(error = ?err, "Failed to read language preference");
                return Language::default();
            }
        }
    }

    pub fn set_language(&self, language: Language) -> Result<()> {
        tracing::debug!(language = %language, "Changing language");
        return self.storage.set_item(LANGUAGE_KEY, &language.code());
    }

    pub fn favorites(&self) -> Result<BTreeSet<u64>> {
        let payload = match self.storage.get_item(FAVORITES_KEY)? {
            Some(payload) => payload,
            None => return Ok(BTreeSet::new()),
        };

        return Ok(serde_json::from_str(&payload).unwrap_or_default());
    }

    /// Returns whether the product is a favourite after toggling.
    pub fn toggle_favorite(&self, product_id: u64) -> Result<bool> {
        let mut favorites = self.favorites()?;
        let is_favorite = if favorites.contains(&product_id) {
            favorites.remove(&product_id);
            false
        } else {
            favorites.insert(product_id);
            true
        };

        self.storage
            .set_item(FAVORITES_KEY, &serde_json::to_string(&favorites)?)?;

        return Ok(is_favorite);
    }
}
