use crate::{MetricsTab, TabView};

/// Tab content routing: the sub-view to show for `active_key`, if any.
///
/// Only the returned tab's view gets built by the renderer.
pub fn route(active_key: &str) -> Option<MetricsTab> {
    MetricsTab::from_key(active_key)
}

/// Tab bar entries in display order, with the matching entry marked active.
pub fn tab_bar(active_key: &str) -> Vec<TabView> {
    MetricsTab::ALL
        .into_iter()
        .map(|tab| TabView {
            tab,
            key: tab.key(),
            label: tab.label(),
            active: tab.key() == active_key,
        })
        .collect()
}
