use std::sync::Arc;

use anyhow::Result;

pub const LANGUAGE_KEY: &str = "deep-shiva-language";
pub const CHAT_HISTORY_KEY: &str = "deep-shiva-chat-history";
pub const FAVORITES_KEY: &str = "deep-shiva-favorites";

/// Synchronous string key/value store, the terminal counterpart of a
/// browser's local storage.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a key that does not exist is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

pub type StorageBox = Arc<dyn Storage + Send + Sync>;
