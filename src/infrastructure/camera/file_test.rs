use std::fs;

use anyhow::Result;

use super::FileCamera;
use crate::domain::models::Camera;

#[tokio::test]
async fn it_captures_file_contents() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let frame_path = dir.path().join("frame.jpg");
    fs::write(&frame_path, [0xFF, 0xD8, 0xFF, 0xD9])?;

    let mut camera = FileCamera::with_path(frame_path);
    camera.start().await?;
    let frame = camera.capture_frame().await?;
    camera.stop().await?;

    assert_eq!(frame, vec![0xFF, 0xD8, 0xFF, 0xD9]);

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_start_without_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut camera = FileCamera::with_path(dir.path().join("missing.jpg"));

    assert!(camera.start().await.is_err());

    return Ok(());
}

#[tokio::test]
async fn it_refuses_capture_before_start() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let frame_path = dir.path().join("frame.jpg");
    fs::write(&frame_path, [0xFF, 0xD8])?;

    let mut camera = FileCamera::with_path(frame_path);
    assert!(camera.capture_frame().await.is_err());

    return Ok(());
}
