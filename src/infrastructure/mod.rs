pub mod api;
pub mod camera;
pub mod speech;
pub mod storage;
