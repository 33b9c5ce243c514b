pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
mod chat_session;
pub mod events;
mod preferences;
mod scroll;
mod sessions;
mod translations;
mod yoga;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use chat_session::*;
pub use preferences::*;
pub use scroll::*;
pub use sessions::*;
pub use translations::*;
pub use yoga::*;
