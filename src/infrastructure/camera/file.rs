#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Camera;
use crate::domain::models::CameraName;

/// Reads frames from a JPEG file on disk, such as one kept fresh by an
/// external capture tool.
pub struct FileCamera {
    path: path::PathBuf,
    started: bool,
}

impl Default for FileCamera {
    fn default() -> FileCamera {
        return FileCamera::with_path(path::PathBuf::from(Config::get(ConfigKey::CameraFile)));
    }
}

impl FileCamera {
    pub fn with_path(path: path::PathBuf) -> FileCamera {
        return FileCamera {
            path,
            started: false,
        };
    }
}

#[async_trait]
impl Camera for FileCamera {
    fn name(&self) -> CameraName {
        return CameraName::File;
    }

    #[allow(clippy::implicit_return)]
    async fn start(&mut self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            bail!("No camera-file configured");
        }
        if !self.path.exists() {
            bail!(format!("Camera file {} does not exist", self.path.display()));
        }

        self.started = true;
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn capture_frame(&mut self) -> Result<Vec<u8>> {
        if !self.started {
            bail!("Camera has not been started");
        }

        let frame = fs::read(&self.path)
            .await
            .with_context(|| return format!("Failed to read {}", self.path.display()))?;

        return Ok(frame);
    }

    #[allow(clippy::implicit_return)]
    async fn stop(&mut self) -> Result<()> {
        self.started = false;
        return Ok(());
    }
}
