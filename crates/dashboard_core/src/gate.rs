use crate::JobStatus;

/// Outcome of the status gate for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Render only the status indicator for the observed value.
    ShowIndicator,
    /// Render the tab bar and routed content.
    ShowContent,
}

/// Decides whether the metrics tabs may render for `status`.
///
/// `None` means no poll has answered yet; it is gated like any other
/// non-succeeded value.
pub fn gate(status: Option<&JobStatus>) -> GateDecision {
    match status {
        Some(JobStatus::Succeeded) => GateDecision::ShowContent,
        Some(
            JobStatus::Importing
            | JobStatus::Error
            | JobStatus::MissingReference
            | JobStatus::MissingCurrent
            | JobStatus::Other(_),
        )
        | None => GateDecision::ShowIndicator,
    }
}
