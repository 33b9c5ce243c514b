#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context;
use anyhow::Result;

use crate::domain::models::Storage;

/// Keeps every key in its own file under `dir`, written atomically through a
/// temporary sibling file.
pub struct FileStorage {
    pub dir: path::PathBuf,
}

impl FileStorage {
    pub fn new(dir: path::PathBuf) -> FileStorage {
        return FileStorage { dir };
    }

    fn get_file_path(&self, key: &str) -> path::PathBuf {
        return self.dir.join(format!("{key}.json"));
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.get_file_path(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let payload = fs::read_to_string(&file_path)
            .with_context(|| return format!("Failed to read {}", file_path.display()))?;

        return Ok(Some(payload));
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let file_path = self.get_file_path(key);
        let tmp_path = self.dir.join(format!(".{key}.json.tmp"));

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, &file_path)
            .with_context(|| return format!("Failed to write {}", file_path.display()))?;

        tracing::debug!(key, path = ?file_path, "Stored item");
        return Ok(());
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let file_path = self.get_file_path(key);
        if !file_path.exists() {
            return Ok(());
        }

        fs::remove_file(file_path)?;
        return Ok(());
    }
}
