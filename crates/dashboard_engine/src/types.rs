use std::fmt;

use thiserror::Error;

/// One successful answer from the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Raw `jobStatus` value as sent by the API.
    pub job_status: String,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    Status(StatusSnapshot),
    Failed(PollError),
    Stopped(StopReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A terminal status was observed.
    Terminal,
    /// The handle was stopped or dropped.
    Cancelled,
    /// The runtime could not be created or the sink went away.
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct PollError {
    pub kind: PollFailure,
    pub message: String,
}

impl PollError {
    pub fn new(kind: PollFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollFailure {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedPayload,
    Network,
}

impl fmt::Display for PollFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollFailure::InvalidUrl => write!(f, "invalid url"),
            PollFailure::HttpStatus(code) => write!(f, "http status {code}"),
            PollFailure::Timeout => write!(f, "timeout"),
            PollFailure::TooLarge { max_bytes, actual } => {
                write!(f, "payload too large (max {max_bytes}, actual {actual:?})")
            }
            PollFailure::MalformedPayload => write!(f, "malformed payload"),
            PollFailure::Network => write!(f, "network error"),
        }
    }
}
