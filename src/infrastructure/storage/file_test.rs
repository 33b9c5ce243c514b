use anyhow::Result;

use super::FileStorage;
use crate::domain::models::Storage;

#[test]
fn it_returns_none_for_missing_keys() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::new(dir.path().join("nested"));

    assert_eq!(storage.get_item("deep-shiva-language")?, None);

    return Ok(());
}

#[test]
fn it_sets_and_gets_items() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::new(dir.path().join("nested"));

    storage.set_item("deep-shiva-language", "hi")?;
    assert_eq!(storage.get_item("deep-shiva-language")?, Some("hi".to_string()));
    assert!(dir.path().join("nested/deep-shiva-language.json").exists());

    storage.set_item("deep-shiva-language", "ga")?;
    assert_eq!(storage.get_item("deep-shiva-language")?, Some("ga".to_string()));

    return Ok(());
}

#[test]
fn it_removes_items() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::new(dir.path().to_path_buf());

    storage.set_item("deep-shiva-favorites", "[1,3]")?;
    storage.remove_item("deep-shiva-favorites")?;
    assert_eq!(storage.get_item("deep-shiva-favorites")?, None);

    // Removing twice is fine.
    storage.remove_item("deep-shiva-favorites")?;

    return Ok(());
}
