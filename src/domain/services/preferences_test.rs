use std::sync::Arc;

use anyhow::Result;

use super::Preferences;
use crate::domain::models::Language;
use crate::domain::models::Storage;
use crate::domain::models::LANGUAGE_KEY;
use crate::infrastructure::storage::memory::MemoryStorage;

#[test]
fn it_defaults_to_english() {
    let preferences = Preferences::new(Arc::new(MemoryStorage::default()));
    assert_eq!(preferences.language(), Language::En);
}

#[test]
fn it_persists_language() -> Result<()> {
    let storage = Arc::new(MemoryStorage::default());
    Preferences::new(storage.clone()).set_language(Language::Ga)?;

    assert_eq!(storage.get_item(LANGUAGE_KEY)?, Some("ga".to_string()));
    assert_eq!(Preferences::new(storage).language(), Language::Ga);

    return Ok(());
}

#[test]
fn it_ignores_unknown_stored_language() -> Result<()> {
    let storage = Arc::new(MemoryStorage::default());
    storage.set_item(LANGUAGE_KEY, "klingon")?;

    assert_eq!(Preferences::new(storage).language(), Language::En);

    return Ok(());
}

#[test]
fn it_toggles_favorites() -> Result<()> {
    let preferences = Preferences::new(Arc::new(MemoryStorage::default()));

    assert!(preferences.toggle_favorite(3)?);
    assert!(preferences.toggle_favorite(1)?);
    assert_eq!(preferences.favorites()?.into_iter().collect::<Vec<u64>>(), vec![1, 3]);

    assert!(!preferences.toggle_favorite(3)?);
    assert_eq!(preferences.favorites()?.into_iter().collect::<Vec<u64>>(), vec![1]);

    return Ok(());
}
