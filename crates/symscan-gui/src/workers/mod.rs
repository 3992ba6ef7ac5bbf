mod dispatch;
mod io;
mod pipeline;

pub use dispatch::spawn_worker;
pub(crate) use dispatch::{send, send_error};
