use crate::{JobStatus, Location};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Poller observed a status value.
    StatusPolled(JobStatus),
    /// Poller could not obtain a status this round.
    PollFailed { reason: String },
    /// User picked a tab. Any key is accepted.
    TabChanged(String),
    /// Address changed from outside the tab bar (history, manual open).
    LocationChanged(Location),
}
