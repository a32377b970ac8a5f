use std::fmt;

/// Lifecycle state of the reference-data import job, as reported by the
/// monitoring API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Importing,
    Succeeded,
    Error,
    MissingReference,
    MissingCurrent,
    /// A value the API sent that this build does not know. Kept verbatim so
    /// the status indicator can still show it.
    Other(String),
}

impl JobStatus {
    /// Maps a wire value (`"SUCCEEDED"`, `"importing"`, ...) to a status.
    /// Never fails: unrecognised values become [`JobStatus::Other`].
    pub fn from_wire(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "IMPORTING" => JobStatus::Importing,
            "SUCCEEDED" => JobStatus::Succeeded,
            "ERROR" => JobStatus::Error,
            "MISSING_REFERENCE" => JobStatus::MissingReference,
            "MISSING_CURRENT" => JobStatus::MissingCurrent,
            _ => JobStatus::Other(trimmed.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            JobStatus::Importing => "IMPORTING",
            JobStatus::Succeeded => "SUCCEEDED",
            JobStatus::Error => "ERROR",
            JobStatus::MissingReference => "MISSING_REFERENCE",
            JobStatus::MissingCurrent => "MISSING_CURRENT",
            JobStatus::Other(raw) => raw,
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, JobStatus::Succeeded)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}
