//! Dashboard engine: job-status polling and address persistence IO.
mod persist;
mod poller;
mod source;
mod types;

pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use poller::{ChannelEventSink, PollEventSink, PollerHandle};
pub use source::{PollSettings, ReqwestStatusSource, StatusSource};
pub use types::{PollError, PollEvent, PollFailure, StatusSnapshot, StopReason};
