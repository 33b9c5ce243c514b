#[cfg(test)]
#[path = "vision_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

pub const PERFECT_STATUS: &str = "Perfect";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseRequest {
    /// Base64 JPEG without a `data:` URL header.
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseAnalysis {
    pub status: String,
    pub feedback: String,
    pub confidence: f64,
}

impl PoseAnalysis {
    pub fn failed() -> PoseAnalysis {
        return PoseAnalysis {
            status: "Error".to_string(),
            feedback: "Failed to analyze pose. Please try again.".to_string(),
            confidence: 0.0,
        };
    }

    pub fn is_perfect(&self) -> bool {
        return self.status == PERFECT_STATUS;
    }

    pub fn confidence_percent(&self) -> u32 {
        return (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u32;
    }
}

#[async_trait]
pub trait PoseApi {
    async fn analyze_pose(&self, req: &PoseRequest) -> Result<PoseAnalysis>;
}
