use super::*;

fn deployment(name: &str, is_available: bool) -> Deployment {
    Deployment { name: name.to_owned(), is_available, models: Vec::new(), env_vars: Vec::new() }
}

// =============================================================
// select_default_deployment
// =============================================================

#[test]
fn picks_first_available_in_list_order() {
    let all = vec![
        deployment("SageMaker", false),
        deployment("Cohere Platform", true),
        deployment("Azure", true),
    ];
    assert_eq!(select_default_deployment(None, Some(all.as_slice())), Some("Cohere Platform".to_owned()));
}

#[test]
fn never_overrides_existing_selection() {
    let all = vec![deployment("Cohere Platform", true)];
    assert_eq!(select_default_deployment(Some("Azure"), Some(all.as_slice())), None);
}

#[test]
fn empty_selection_counts_as_unset() {
    let all = vec![deployment("Cohere Platform", true)];
    assert_eq!(select_default_deployment(Some(""), Some(all.as_slice())), Some("Cohere Platform".to_owned()));
}

#[test]
fn no_selection_when_every_entry_unavailable() {
    let all = vec![deployment("SageMaker", false), deployment("Bedrock", false)];
    assert_eq!(select_default_deployment(None, Some(all.as_slice())), None);
}

#[test]
fn no_selection_before_list_loads_or_when_empty() {
    assert_eq!(select_default_deployment(None, None), None);
    assert_eq!(select_default_deployment(None, Some(&[][..])), None);
}

#[test]
fn blank_names_are_never_selected() {
    let blank_only = vec![deployment("", true)];
    assert_eq!(select_default_deployment(None, Some(blank_only.as_slice())), None);

    let mixed = vec![deployment("", true), deployment("Cohere Platform", true)];
    assert_eq!(select_default_deployment(None, Some(mixed.as_slice())), Some("Cohere Platform".to_owned()));
}

#[test]
fn rerun_after_selection_is_a_no_op() {
    let all = vec![deployment("Cohere Platform", true), deployment("Azure", true)];
    let first = select_default_deployment(None, Some(all.as_slice()));
    assert_eq!(first.as_deref(), Some("Cohere Platform"));
    assert_eq!(select_default_deployment(first.as_deref(), Some(all.as_slice())), None);
}

// =============================================================
// DeploymentsState
// =============================================================

#[test]
fn deployments_state_distinguishes_unloaded_from_empty() {
    let mut state = DeploymentsState::default();
    assert!(!state.is_loaded());
    state.items = Some(Vec::new());
    assert!(state.is_loaded());
    assert_eq!(state.available().count(), 0);
}

#[test]
fn available_filters_unavailable_entries() {
    let state = DeploymentsState {
        items: Some(vec![deployment("A", true), deployment("B", false), deployment("", true), deployment("C", true)]),
        ..DeploymentsState::default()
    };
    let names: Vec<&str> = state.available().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}
