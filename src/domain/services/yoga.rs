#[cfg(test)]
#[path = "yoga_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::models::Camera;
use crate::domain::models::PoseAnalysis;
use crate::domain::models::PoseApi;
use crate::domain::models::PoseRequest;

const JPEG_MAGIC: [u8; 2] = [0xFF, 0xD8];

#[derive(Clone, Debug, PartialEq)]
pub enum YogaOutcome {
    /// The camera could not be started or returned no usable frame.
    CameraRequired(String),
    Analysis(PoseAnalysis),
}

pub struct YogaService {}

impl YogaService {
    async fn capture(camera: &mut (dyn Camera + Send + Sync)) -> Result<Vec<u8>> {
        camera.start().await?;
        let frame = camera.capture_frame().await;
        if let Err(err) = camera.stop().await {
            tracing::warn!(error = ?err, "Failed to stop camera");
        }

        let frame = frame?;
        if !frame.starts_with(&JPEG_MAGIC) {
            bail!("Camera frame is not a JPEG image");
        }

        return Ok(frame);
    }

    /// Captures one frame and asks the vision service to grade the pose.
    /// Analysis failures collapse into `PoseAnalysis::failed`.
    pub async fn analyze(
        camera: &mut (dyn Camera + Send + Sync),
        api: &(dyn PoseApi + Send + Sync),
    ) -> YogaOutcome {
        let frame = match YogaService::capture(camera).await {
            Ok(frame) => frame,
            Err(err) => {
                tracing::warn!(camera = %camera.name(), error = ?err, "Camera unavailable");
                return YogaOutcome::CameraRequired(err.to_string());
            }
        };

        let req = PoseRequest {
            image: STANDARD.encode(frame),
        };

        match api.analyze_pose(&req).await {
            Ok(analysis) => return YogaOutcome::Analysis(analysis),
            Err(err) => {
                tracing::error!(error = ?err, "Pose analysis failed");
                return YogaOutcome::Analysis(PoseAnalysis::failed());
            }
        }
    }
}
