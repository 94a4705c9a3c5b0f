//! Mount status from the server-sent event stream

mod monitor;
mod stream;

pub use monitor::StatusMonitor;
pub use stream::StatusStream;
