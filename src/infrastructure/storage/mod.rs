pub mod file;
#[cfg(test)]
pub mod memory;

use std::path;
use std::sync::Arc;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::StorageBox;

pub struct StorageManager {}

impl StorageManager {
    /// File backed storage rooted at the configured data directory.
    pub fn get() -> Result<StorageBox> {
        let data_dir = path::PathBuf::from(Config::get(ConfigKey::DataDir));
        return Ok(Arc::new(file::FileStorage::new(data_dir)));
    }
}
