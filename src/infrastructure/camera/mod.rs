pub mod command;
pub mod file;
pub mod noop;

use anyhow::Result;

use crate::domain::models::CameraBox;
use crate::domain::models::CameraName;

pub struct CameraManager {}

impl CameraManager {
    pub fn get(name: CameraName) -> Result<CameraBox> {
        if name == CameraName::Command {
            return Ok(Box::<command::CommandCamera>::default());
        }

        if name == CameraName::File {
            return Ok(Box::<file::FileCamera>::default());
        }

        return Ok(Box::<noop::NoopCamera>::default());
    }
}
