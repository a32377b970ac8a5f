use dashboard_logging::{dash_debug, dash_info, dash_warn};

use crate::{select_tab, DashboardState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DashboardState, msg: Msg) -> (DashboardState, Vec<Effect>) {
    let effects = match msg {
        Msg::StatusPolled(status) => {
            dash_debug!("job status polled: {}", status);
            state.set_job_status(status);
            Vec::new()
        }
        Msg::PollFailed { reason } => {
            dash_warn!("job status poll failed: {}", reason);
            state.record_poll_failure(reason);
            Vec::new()
        }
        Msg::TabChanged(key) => {
            let next = select_tab(state.location(), &key);
            if state.set_location(next.clone()) {
                dash_info!("tab changed to {:?}, navigating to {}", key, next);
                vec![Effect::Navigate { location: next }]
            } else {
                // Same tab again: the address already says so.
                Vec::new()
            }
        }
        Msg::LocationChanged(location) => {
            dash_debug!("location changed to {}", location);
            state.set_location(location);
            Vec::new()
        }
    };

    (state, effects)
}
