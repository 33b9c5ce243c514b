use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CameraName {
    Command,
    File,
    None,
}

impl CameraName {
    pub fn parse(text: String) -> Option<CameraName> {
        return CameraName::iter().find(|e| return e.to_string() == text);
    }
}

#[async_trait]
pub trait Camera {
    fn name(&self) -> CameraName;

    /// Acquires the device. Failing here means the camera is unavailable or
    /// permission was denied.
    async fn start(&mut self) -> Result<()>;

    /// Returns a single JPEG encoded frame.
    async fn capture_frame(&mut self) -> Result<Vec<u8>>;

    async fn stop(&mut self) -> Result<()>;
}

pub type CameraBox = Box<dyn Camera + Send + Sync>;
