use super::*;

fn tool(name: &str, auth_required: bool) -> ManagedTool {
    ManagedTool {
        name: Some(name.to_owned()),
        display_name: Some(name.to_uppercase()),
        is_auth_required: auth_required,
        ..ManagedTool::default()
    }
}

fn names(tools: &[ManagedTool]) -> Vec<&str> {
    tools.iter().filter_map(|t| t.name.as_deref()).collect()
}

// =============================================================
// partition_tools
// =============================================================

#[test]
fn partition_splits_on_auth_requirement() {
    let input = vec![tool("web_search", false), tool("google_drive", true), tool("calculator", false)];
    let out = partition_tools(None, &input);
    assert_eq!(names(&out.available), vec!["web_search", "calculator"]);
    assert_eq!(names(&out.unauthed), vec!["google_drive"]);
}

#[test]
fn partition_covers_every_input_exactly_once_without_pinning() {
    let input = vec![
        tool("a", false),
        tool("b", true),
        tool("c", true),
        tool("d", false),
        ManagedTool::default(),
    ];
    let out = partition_tools(None, &input);
    assert_eq!(out.available.len() + out.unauthed.len(), input.len());
    for t in &input {
        let hits = out.available.iter().chain(out.unauthed.iter()).filter(|x| *x == t).count();
        assert_eq!(hits, 1, "tool {:?} should appear exactly once", t.name);
    }
}

#[test]
fn partition_drops_tools_outside_pinned_set() {
    let agent = Agent { name: "Research Bot".to_owned(), tools: Some(vec!["web_search".to_owned(), "google_drive".to_owned()]), ..Agent::default() };
    let input = vec![tool("web_search", false), tool("calculator", false), tool("google_drive", true)];
    let out = partition_tools(Some(&agent), &input);
    assert_eq!(names(&out.available), vec!["web_search"]);
    assert_eq!(names(&out.unauthed), vec!["google_drive"]);
}

#[test]
fn partition_with_empty_pinned_set_keeps_nothing() {
    let agent = Agent { tools: Some(Vec::new()), ..Agent::default() };
    let out = partition_tools(Some(&agent), &[tool("web_search", false)]);
    assert!(out.available.is_empty());
    assert!(out.unauthed.is_empty());
}

#[test]
fn partition_of_empty_input_is_empty() {
    assert_eq!(partition_tools(None, &[]), AvailableTools::default());
}

#[test]
fn agent_without_pinned_tools_does_not_filter() {
    let agent = Agent { name: "Open Bot".to_owned(), ..Agent::default() };
    let out = partition_tools(Some(&agent), &[tool("web_search", false)]);
    assert_eq!(names(&out.available), vec!["web_search"]);
}

// =============================================================
// ToolsState loads
// =============================================================

#[test]
fn tools_state_default_is_unloaded() {
    let state = ToolsState::default();
    assert_eq!(state.items, None);
    assert!(!state.loading);
}

#[test]
fn begin_load_clears_previous_agents_tools() {
    let mut state = ToolsState::default();
    let first = state.begin_load();
    assert!(state.finish_load(first, Ok(vec![tool("web_search", false)])));
    assert_eq!(state.status(), ToolsLoad::Ready);

    state.begin_load();
    assert_eq!(state.items, None);
    assert_eq!(state.status(), ToolsLoad::Loading);
}

#[test]
fn stale_response_is_dropped() {
    let mut state = ToolsState::default();
    let for_agent_a = state.begin_load();
    let for_agent_b = state.begin_load();

    assert!(state.finish_load(for_agent_b, Ok(vec![tool("calculator", false)])));
    assert!(!state.finish_load(for_agent_a, Ok(vec![tool("web_search", false)])));
    assert_eq!(names(state.items.as_deref().unwrap_or_default()), vec!["calculator"]);
}

#[test]
fn stale_failure_does_not_mark_newer_load_failed() {
    let mut state = ToolsState::default();
    let old = state.begin_load();
    let _current = state.begin_load();
    assert!(!state.finish_load(old, Err("timeout".to_owned())));
    assert_eq!(state.status(), ToolsLoad::Loading);
}

#[test]
fn failed_load_reports_failure_instead_of_loading() {
    let mut state = ToolsState::default();
    let generation = state.begin_load();
    assert!(state.finish_load(generation, Err("network error: offline".to_owned())));
    assert_eq!(state.status(), ToolsLoad::Failed("network error: offline".to_owned()));
}
