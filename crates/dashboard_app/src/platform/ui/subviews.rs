//! The three metric sub-views. Each one is self-contained and built with no
//! arguments; the renderer only builds the one whose tab is active.

use dashboard_core::MetricsTab;

pub trait SubView {
    fn lines(&self) -> Vec<String>;
}

struct DataQualityView;
struct ModelQualityView;
struct ImportView;

impl SubView for DataQualityView {
    fn lines(&self) -> Vec<String> {
        vec![
            "Reference data quality".to_string(),
            "  numerical and categorical feature statistics of the reference dataset".to_string(),
        ]
    }
}

impl SubView for ModelQualityView {
    fn lines(&self) -> Vec<String> {
        vec![
            "Reference model quality".to_string(),
            "  global metrics computed on the reference dataset".to_string(),
        ]
    }
}

impl SubView for ImportView {
    fn lines(&self) -> Vec<String> {
        vec![
            "Reference import".to_string(),
            "  dataset file and import details".to_string(),
        ]
    }
}

/// Sub-view factory keyed by tab.
pub fn build(tab: MetricsTab) -> Box<dyn SubView> {
    match tab {
        MetricsTab::DataQuality => Box::new(DataQualityView),
        MetricsTab::ModelQuality => Box::new(ModelQualityView),
        MetricsTab::Import => Box::new(ImportView),
    }
}
