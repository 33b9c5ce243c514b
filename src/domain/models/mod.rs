mod action;
mod api;
mod camera;
mod culture;
mod emergency;
mod event;
mod language;
mod loading;
mod message;
mod role;
mod session;
mod slash_commands;
mod storage;
mod textarea;
mod tourism;
mod vision;
mod voice;

pub use action::*;
pub use api::*;
pub use camera::*;
pub use culture::*;
pub use emergency::*;
pub use event::*;
pub use language::*;
pub use loading::*;
pub use message::*;
pub use role::*;
pub use session::*;
pub use slash_commands::*;
pub use storage::*;
pub use textarea::*;
pub use tourism::*;
pub use vision::*;
pub use voice::*;
