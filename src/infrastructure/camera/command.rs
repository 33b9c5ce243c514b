#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use std::process::Stdio;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Camera;
use crate::domain::models::CameraName;

/// Captures a frame by running a shell command that writes one JPEG image to
/// stdout, e.g. `ffmpeg -f v4l2 -i /dev/video0 -frames:v 1 -f mjpeg -`.
pub struct CommandCamera {
    command: String,
    started: bool,
}

impl Default for CommandCamera {
    fn default() -> CommandCamera {
        return CommandCamera::with_command(&Config::get(ConfigKey::CameraCommand));
    }
}

impl CommandCamera {
    pub fn with_command(command: &str) -> CommandCamera {
        return CommandCamera {
            command: command.to_string(),
            started: false,
        };
    }
}

#[async_trait]
impl Camera for CommandCamera {
    fn name(&self) -> CameraName {
        return CameraName::Command;
    }

    #[allow(clippy::implicit_return)]
    async fn start(&mut self) -> Result<()> {
        if self.command.trim().is_empty() {
            bail!("No camera-command configured");
        }

        self.started = true;
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn capture_frame(&mut self) -> Result<Vec<u8>> {
        if !self.started {
            bail!("Camera has not been started");
        }

        let output = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            tracing::error!(
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr),
                "Camera command failed"
            );
            bail!(format!("Camera command exited with {}", output.status));
        }

        tracing::debug!(bytes = output.stdout.len(), "Captured frame");
        return Ok(output.stdout);
    }

    #[allow(clippy::implicit_return)]
    async fn stop(&mut self) -> Result<()> {
        self.started = false;
        return Ok(());
    }
}
