//! Demo host screen state and events

mod event;
mod state;

pub use event::{Event, Handler};
pub use state::App;
