use crate::{Location, QueryString};

/// Query parameter holding the active metrics tab.
pub const TAB_QUERY_KEY: &str = "tab-metrics";

/// Key used when the address carries no tab. It matches none of the tabs, so
/// the tab bar renders with nothing selected until the user picks one.
pub const DEFAULT_TAB_KEY: &str = "metrics";

/// The three sections of the reference metrics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricsTab {
    DataQuality,
    ModelQuality,
    Import,
}

impl MetricsTab {
    /// Tab bar order.
    pub const ALL: [MetricsTab; 3] = [
        MetricsTab::DataQuality,
        MetricsTab::ModelQuality,
        MetricsTab::Import,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MetricsTab::DataQuality => "data-quality",
            MetricsTab::ModelQuality => "model-quality",
            MetricsTab::Import => "import",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricsTab::DataQuality => "Data Quality",
            MetricsTab::ModelQuality => "Model Quality",
            MetricsTab::Import => "Import",
        }
    }

    /// Exact, case-sensitive match on the tab key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

/// Reads the active tab key from the address, falling back to
/// [`DEFAULT_TAB_KEY`]. The value is returned as-is, known or not.
pub fn active_tab_key(query: &QueryString) -> &str {
    query.get(TAB_QUERY_KEY).unwrap_or(DEFAULT_TAB_KEY)
}

/// Address after switching to `key`. Only [`TAB_QUERY_KEY`] changes.
pub fn select_tab(location: &Location, key: &str) -> Location {
    let mut query = location.query().clone();
    query.set(TAB_QUERY_KEY, key);
    location.with_query(query)
}
