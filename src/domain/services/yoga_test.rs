use std::sync::Mutex;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use super::YogaOutcome;
use super::YogaService;
use crate::domain::models::Camera;
use crate::domain::models::CameraName;
use crate::domain::models::PoseAnalysis;
use crate::domain::models::PoseApi;
use crate::domain::models::PoseRequest;

struct FakeCamera {
    frame: Option<Vec<u8>>,
    started: bool,
    stopped: bool,
}

impl FakeCamera {
    fn new(frame: Option<Vec<u8>>) -> FakeCamera {
        return FakeCamera {
            frame,
            started: false,
            stopped: false,
        };
    }
}

#[async_trait]
impl Camera for FakeCamera {
    fn name(&self) -> CameraName {
        return CameraName::File;
    }

    #[allow(clippy::implicit_return)]
    async fn start(&mut self) -> Result<()> {
        if self.frame.is_none() {
            bail!("Permission denied");
        }
        self.started = true;
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn capture_frame(&mut self) -> Result<Vec<u8>> {
        match &self.frame {
            Some(frame) => return Ok(frame.to_vec()),
            None => bail!("Camera not started"),
        }
    }

    #[allow(clippy::implicit_return)]
    async fn stop(&mut self) -> Result<()> {
        self.stopped = true;
        return Ok(());
    }
}

struct FakePoseApi {
    fail: bool,
    requests: Mutex<Vec<PoseRequest>>,
}

#[async_trait]
impl PoseApi for FakePoseApi {
    #[allow(clippy::implicit_return)]
    async fn analyze_pose(&self, req: &PoseRequest) -> Result<PoseAnalysis> {
        self.requests.lock().unwrap().push(req.clone());
        if self.fail {
            bail!("500 Internal Server Error");
        }

        return Ok(PoseAnalysis {
            status: "Perfect".to_string(),
            feedback: "Great alignment.".to_string(),
            confidence: 0.92,
        });
    }
}

fn api(fail: bool) -> FakePoseApi {
    return FakePoseApi {
        fail,
        requests: Mutex::new(vec![]),
    };
}

#[tokio::test]
async fn it_sends_base64_frame_without_header() {
    let mut camera = FakeCamera::new(Some(vec![0xFF, 0xD8, 0xFF, 0xE0]));
    let api = api(false);

    let outcome = YogaService::analyze(&mut camera, &api).await;

    match outcome {
        YogaOutcome::Analysis(analysis) => assert!(analysis.is_perfect()),
        _ => panic!("expected analysis"),
    }
    assert_eq!(
        api.requests.lock().unwrap()[0].image,
        "/9j/4A==".to_string()
    );
    assert!(camera.started);
    assert!(camera.stopped);
}

#[tokio::test]
async fn it_requires_camera() {
    let mut camera = FakeCamera::new(None);
    let api = api(false);

    let outcome = YogaService::analyze(&mut camera, &api).await;

    assert_eq!(
        outcome,
        YogaOutcome::CameraRequired("Permission denied".to_string())
    );
    assert!(api.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn it_rejects_non_jpeg_frames() {
    let mut camera = FakeCamera::new(Some(b"GIF89a".to_vec()));
    let api = api(false);

    let outcome = YogaService::analyze(&mut camera, &api).await;

    assert!(matches!(outcome, YogaOutcome::CameraRequired(_)));
    assert!(camera.stopped);
}

#[tokio::test]
async fn it_falls_back_on_analysis_failure() {
    let mut camera = FakeCamera::new(Some(vec![0xFF, 0xD8, 0x00]));
    let api = api(true);

    let outcome = YogaService::analyze(&mut camera, &api).await;

    assert_eq!(outcome, YogaOutcome::Analysis(PoseAnalysis::failed()));
}
