use anyhow::Result;
use dashmap::DashMap;

use crate::domain::models::Storage;

#[derive(Default)]
pub struct MemoryStorage {
    items: DashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        return Ok(self.items.get(key).map(|val| return val.to_string()));
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        return Ok(());
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.remove(key);
        return Ok(());
    }
}
