use dashboard_core::{DashboardBody, DashboardViewModel, JobStatus, MetricsTab, TabsView};

use super::subviews::SubView;

/// Lays out one frame. `build_view` is called at most once, for the active
/// tab only.
pub fn render<F>(view: &DashboardViewModel, build_view: F) -> Vec<String>
where
    F: FnOnce(MetricsTab) -> Box<dyn SubView>,
{
    let mut lines = vec![format!("== {} ==", view.address)];

    match &view.body {
        DashboardBody::Gated { status, poll_error } => {
            lines.push(status_indicator(status.as_ref()));
            if let Some(reason) = poll_error {
                lines.push(format!("   last poll failed: {reason}"));
            }
        }
        DashboardBody::Active(tabs) => {
            lines.push(tab_bar(tabs));
            if let Some(tab) = tabs.content {
                lines.extend(build_view(tab).lines());
            }
        }
    }

    lines
}

/// One-line status indicator, parameterized by the raw observed value.
pub fn status_indicator(status: Option<&JobStatus>) -> String {
    match status {
        None => "[..] Loading reference status".to_string(),
        Some(JobStatus::Importing) => {
            "[~~] Importing reference data, metrics appear when the job completes".to_string()
        }
        Some(JobStatus::Succeeded) => "[ok] Reference import succeeded".to_string(),
        Some(JobStatus::Error) => "[!!] Reference import failed".to_string(),
        Some(JobStatus::MissingReference) => "[--] No reference dataset uploaded".to_string(),
        Some(JobStatus::MissingCurrent) => "[--] No current dataset uploaded".to_string(),
        Some(JobStatus::Other(raw)) => format!("[??] Reference job status: {raw}"),
    }
}

fn tab_bar(tabs: &TabsView) -> String {
    tabs.tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[*{}*]", tab.label)
            } else {
                format!("[ {} ]", tab.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::platform::ui::subviews;
    use dashboard_core::{update, DashboardState, Location, Msg};

    fn view_at(href: &str, status: Option<JobStatus>) -> DashboardViewModel {
        let mut state = DashboardState::new(Location::parse(href));
        if let Some(status) = status {
            state = update(state, Msg::StatusPolled(status)).0;
        }
        state.view()
    }

    #[test]
    fn gated_frame_shows_only_the_indicator() {
        let view = view_at("/r?tab-metrics=import", Some(JobStatus::Importing));
        let built = Cell::new(0);

        let lines = render(&view, |tab| {
            built.set(built.get() + 1);
            subviews::build(tab)
        });

        assert_eq!(
            lines,
            vec![
                "== /r?tab-metrics=import ==".to_string(),
                status_indicator(Some(&JobStatus::Importing)),
            ]
        );
        assert_eq!(built.get(), 0);
    }

    #[test]
    fn active_frame_builds_only_the_selected_sub_view() {
        let view = view_at("/r?tab-metrics=model-quality", Some(JobStatus::Succeeded));
        let built = Cell::new(Vec::new());

        let lines = render(&view, |tab| {
            let mut seen = built.take();
            seen.push(tab);
            built.set(seen);
            subviews::build(tab)
        });

        assert_eq!(built.take(), vec![MetricsTab::ModelQuality]);
        assert_eq!(lines[1], "[ Data Quality ] [*Model Quality*] [ Import ]");
        assert_eq!(lines[2], "Reference model quality");
    }

    #[test]
    fn default_tab_renders_bar_without_content() {
        let view = view_at("/r", Some(JobStatus::Succeeded));

        let lines = render(&view, subviews::build);

        assert_eq!(
            lines,
            vec![
                "== /r ==".to_string(),
                "[ Data Quality ] [ Model Quality ] [ Import ]".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_status_is_shown_verbatim() {
        assert_eq!(
            status_indicator(Some(&JobStatus::Other("QUEUED".to_string()))),
            "[??] Reference job status: QUEUED"
        );
        assert_eq!(status_indicator(None), "[..] Loading reference status");
    }
}
