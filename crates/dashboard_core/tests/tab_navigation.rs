use std::sync::Once;

use dashboard_core::{
    update, DashboardBody, DashboardState, Effect, JobStatus, Location, MetricsTab, Msg,
    TAB_QUERY_KEY,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

fn succeeded_at(href: &str) -> DashboardState {
    let state = DashboardState::new(Location::parse(href));
    update(state, Msg::StatusPolled(JobStatus::Succeeded)).0
}

fn content(state: &DashboardState) -> Option<MetricsTab> {
    match state.view().body {
        DashboardBody::Active(tabs) => tabs.content,
        DashboardBody::Gated { .. } => panic!("expected tab view"),
    }
}

#[test]
fn tab_change_writes_query_and_switches_content() {
    init_logging();
    let state = succeeded_at("/models/abc/reference?tab-metrics=data-quality");
    assert_eq!(content(&state), Some(MetricsTab::DataQuality));

    let (state, effects) = update(state, Msg::TabChanged("import".to_string()));

    let expected = Location::parse("/models/abc/reference?tab-metrics=import");
    assert_eq!(state.location(), &expected);
    assert_eq!(effects, vec![Effect::Navigate { location: expected }]);
    assert_eq!(state.location().query().get(TAB_QUERY_KEY), Some("import"));
    assert_eq!(content(&state), Some(MetricsTab::Import));
}

#[test]
fn tab_change_from_default_appends_parameter() {
    init_logging();
    let state = succeeded_at("/models/abc/reference");

    let (state, _effects) = update(state, Msg::TabChanged("model-quality".to_string()));

    assert_eq!(
        state.view().address,
        "/models/abc/reference?tab-metrics=model-quality"
    );
    assert_eq!(content(&state), Some(MetricsTab::ModelQuality));
}

#[test]
fn tab_change_preserves_other_parameters_and_their_order() {
    init_logging();
    let state = succeeded_at("/r?from=2024-01-01&tab-metrics=data-quality&to=2024-02-01&q=a+b");

    let (state, _effects) = update(state, Msg::TabChanged("import".to_string()));

    let pairs: Vec<_> = state.location().query().pairs().collect();
    assert_eq!(
        pairs,
        vec![
            ("from", "2024-01-01"),
            ("tab-metrics", "import"),
            ("to", "2024-02-01"),
            ("q", "a b"),
        ]
    );
}

#[test]
fn same_tab_twice_is_idempotent() {
    init_logging();
    let state = succeeded_at("/r?x=1");

    let (mut state, first) = update(state, Msg::TabChanged("import".to_string()));
    assert_eq!(first.len(), 1);
    assert!(state.consume_dirty());
    let address_after_first = state.view().address;

    let (mut state, second) = update(state, Msg::TabChanged("import".to_string()));
    assert!(second.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view().address, address_after_first);
    assert_eq!(content(&state), Some(MetricsTab::Import));
}

#[test]
fn unknown_tab_key_is_persisted_without_validation() {
    init_logging();
    let state = succeeded_at("/r?tab-metrics=import");

    let (state, effects) = update(state, Msg::TabChanged("not-a-tab".to_string()));

    assert_eq!(state.location().query().get(TAB_QUERY_KEY), Some("not-a-tab"));
    assert_eq!(effects.len(), 1);
    assert_eq!(content(&state), None);
}

#[test]
fn external_location_change_is_observed_on_next_render() {
    init_logging();
    let state = succeeded_at("/r?tab-metrics=import");

    let (state, effects) = update(
        state,
        Msg::LocationChanged(Location::parse("/r?tab-metrics=model-quality")),
    );

    assert!(effects.is_empty());
    assert_eq!(content(&state), Some(MetricsTab::ModelQuality));
}

#[test]
fn tab_change_while_gated_updates_address_but_keeps_gate() {
    init_logging();
    let state = DashboardState::new(Location::parse("/r"));

    let (state, effects) = update(state, Msg::TabChanged("import".to_string()));

    assert_eq!(effects.len(), 1);
    assert!(matches!(state.view().body, DashboardBody::Gated { .. }));

    let (state, _) = update(state, Msg::StatusPolled(JobStatus::Succeeded));
    assert_eq!(content(&state), Some(MetricsTab::Import));
}
