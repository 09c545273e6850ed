use super::*;

#[test]
fn placeholder_reports_failure_before_load_state() {
    assert_eq!(placeholder_label(false, true), "Deployments unavailable");
    assert_eq!(placeholder_label(true, true), "Deployments unavailable");
}

#[test]
fn placeholder_distinguishes_loading_from_empty() {
    assert_eq!(placeholder_label(false, false), "Loading…");
    assert_eq!(placeholder_label(true, false), "No deployment available");
}
