//! Dashboard core: pure state machine and view-model helpers for the
//! reference metrics view.
mod effect;
mod gate;
mod location;
mod msg;
mod router;
mod state;
mod status;
mod tab;
mod update;
mod view_model;

pub use effect::Effect;
pub use gate::{gate, GateDecision};
pub use location::{Location, QueryString};
pub use msg::Msg;
pub use router::{route, tab_bar};
pub use state::DashboardState;
pub use status::JobStatus;
pub use tab::{active_tab_key, select_tab, MetricsTab, DEFAULT_TAB_KEY, TAB_QUERY_KEY};
pub use update::update;
pub use view_model::{DashboardBody, DashboardViewModel, TabView, TabsView};
