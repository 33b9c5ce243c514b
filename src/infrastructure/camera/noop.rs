use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Camera;
use crate::domain::models::CameraName;

#[derive(Default)]
pub struct NoopCamera {}

#[async_trait]
impl Camera for NoopCamera {
    fn name(&self) -> CameraName {
        return CameraName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn start(&mut self) -> Result<()> {
        bail!("No camera configured. Set camera to \"file\" or \"command\"");
    }

    #[allow(clippy::implicit_return)]
    async fn capture_frame(&mut self) -> Result<Vec<u8>> {
        bail!("No camera configured");
    }

    #[allow(clippy::implicit_return)]
    async fn stop(&mut self) -> Result<()> {
        return Ok(());
    }
}
