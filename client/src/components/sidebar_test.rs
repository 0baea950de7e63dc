use super::*;

#[test]
fn exact_route_is_active() {
    assert!(is_active("/collections", "/collections"));
}

#[test]
fn nested_route_keeps_parent_active() {
    assert!(is_active("/collections/c1/edit", "/collections"));
    assert!(is_active("/data-sources/new", "/data-sources"));
}

#[test]
fn shared_prefix_is_not_nesting() {
    assert!(!is_active("/collections-archive", "/collections"));
    assert!(!is_active("/dashboard", "/data-sources"));
}

#[test]
fn nav_lists_every_section_once() {
    let labels: Vec<_> = NAV_ITEMS.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["Dashboard", "Data Collections", "Data Sources", "Models", "Query"]);
}
