use dashboard_core::{Location, QueryString};
use pretty_assertions::assert_eq;

#[test]
fn set_replaces_first_occurrence_and_drops_duplicates() {
    let mut query = QueryString::parse("?a=1&k=old&b=2&k=again");
    query.set("k", "new");

    assert_eq!(query.encode(), "a=1&k=new&b=2");
}

#[test]
fn set_appends_missing_key() {
    let mut query = QueryString::parse("a=1");
    query.set("tab-metrics", "import");

    assert_eq!(query.encode(), "a=1&tab-metrics=import");
}

#[test]
fn values_are_decoded_and_re_encoded() {
    let query = QueryString::parse("name=model%20one&flag");

    assert_eq!(query.get("name"), Some("model one"));
    assert_eq!(query.get("flag"), Some(""));
    assert_eq!(query.get("missing"), None);
    assert_eq!(query.encode(), "name=model+one&flag=");
}

#[test]
fn location_parse_splits_path_and_drops_fragment() {
    let location = Location::parse("/models/abc/reference?tab-metrics=import#top");

    assert_eq!(location.path(), "/models/abc/reference");
    assert_eq!(location.query().get("tab-metrics"), Some("import"));
    assert_eq!(location.href(), "/models/abc/reference?tab-metrics=import");
}

#[test]
fn location_without_query_renders_bare_path() {
    let location = Location::parse("/models/abc/reference");

    assert!(location.query().is_empty());
    assert_eq!(location.to_string(), "/models/abc/reference");
}
