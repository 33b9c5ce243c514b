use anyhow::Result;

use super::CommandCamera;
use crate::domain::models::Camera;

#[tokio::test]
async fn it_captures_stdout() -> Result<()> {
    let mut camera = CommandCamera::with_command("printf '\\377\\330\\377'");
    camera.start().await?;

    assert_eq!(camera.capture_frame().await?, vec![0xFF, 0xD8, 0xFF]);

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_start_without_command() {
    let mut camera = CommandCamera::with_command("");
    assert!(camera.start().await.is_err());
}

#[tokio::test]
async fn it_fails_capture_on_non_zero_exit() -> Result<()> {
    let mut camera = CommandCamera::with_command("echo 'no device' >&2; exit 1");
    camera.start().await?;

    assert!(camera.capture_frame().await.is_err());

    return Ok(());
}
