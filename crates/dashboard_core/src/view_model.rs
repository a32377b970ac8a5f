use crate::{JobStatus, MetricsTab};

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardViewModel {
    pub address: String,
    pub body: DashboardBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardBody {
    /// Job has not succeeded: only the status indicator is shown.
    Gated {
        status: Option<JobStatus>,
        poll_error: Option<String>,
    },
    /// Job succeeded: tab bar plus the routed sub-view.
    Active(TabsView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsView {
    pub active_key: String,
    pub tabs: Vec<TabView>,
    /// `None` when `active_key` matches no tab.
    pub content: Option<MetricsTab>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub tab: MetricsTab,
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}
