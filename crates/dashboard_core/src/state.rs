use crate::view_model::{DashboardBody, DashboardViewModel, TabsView};
use crate::{active_tab_key, gate, route, tab_bar, GateDecision, JobStatus, Location};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    job_status: Option<JobStatus>,
    poll_error: Option<String>,
    location: Location,
    dirty: bool,
}

impl DashboardState {
    /// Fresh state at `location`, before the first poll has answered.
    pub fn new(location: Location) -> Self {
        Self {
            location,
            dirty: true,
            ..Self::default()
        }
    }

    pub fn job_status(&self) -> Option<&JobStatus> {
        self.job_status.as_ref()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn view(&self) -> DashboardViewModel {
        let body = match gate(self.job_status.as_ref()) {
            GateDecision::ShowIndicator => DashboardBody::Gated {
                status: self.job_status.clone(),
                poll_error: self.poll_error.clone(),
            },
            GateDecision::ShowContent => {
                let active_key = active_tab_key(self.location.query());
                DashboardBody::Active(TabsView {
                    active_key: active_key.to_string(),
                    tabs: tab_bar(active_key),
                    content: route(active_key),
                })
            }
        };
        DashboardViewModel {
            address: self.location.href(),
            body,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_job_status(&mut self, status: JobStatus) {
        if self.job_status.as_ref() != Some(&status) || self.poll_error.is_some() {
            self.job_status = Some(status);
            self.poll_error = None;
            self.dirty = true;
        }
    }

    pub(crate) fn record_poll_failure(&mut self, reason: String) {
        self.job_status = Some(JobStatus::Error);
        self.poll_error = Some(reason);
        self.dirty = true;
    }

    /// Returns `false` when `location` is already current.
    pub(crate) fn set_location(&mut self, location: Location) -> bool {
        if self.location == location {
            return false;
        }
        self.location = location;
        self.dirty = true;
        true
    }
}
