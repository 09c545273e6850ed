use super::*;

// =============================================================
// ViewportState
// =============================================================

#[test]
fn viewport_default_is_desktop() {
    let state = ViewportState::default();
    assert!(state.is_desktop);
    assert!(state.is_wide);
}

#[test]
fn viewport_from_width_applies_breakpoints() {
    assert_eq!(
        ViewportState::from_width(500.0, 768.0, 1024.0),
        ViewportState { is_desktop: false, is_wide: false }
    );
    assert_eq!(
        ViewportState::from_width(768.0, 768.0, 1024.0),
        ViewportState { is_desktop: true, is_wide: false }
    );
    assert_eq!(
        ViewportState::from_width(1440.0, 768.0, 1024.0),
        ViewportState { is_desktop: true, is_wide: true }
    );
}

// =============================================================
// panel_mode
// =============================================================

#[test]
fn panel_visible_when_open_or_desktop() {
    for is_open in [false, true] {
        for is_desktop in [false, true] {
            assert_eq!(panel_mode(is_open, is_desktop).is_visible(), is_open || is_desktop);
        }
    }
}

#[test]
fn desktop_panel_is_docked() {
    assert_eq!(panel_mode(false, true), PanelMode::Docked);
    assert!(panel_mode(false, true).is_visible());
}

#[test]
fn narrow_open_panel_is_overlay() {
    let mode = panel_mode(true, false);
    assert_eq!(mode, PanelMode::Overlay);
    assert!(mode.is_visible());
}

#[test]
fn desktop_open_panel_is_docked_and_overlay() {
    assert_eq!(panel_mode(true, true), PanelMode::DockedOverlay);
    assert_eq!(panel_styling(true, true), PanelStyling { docked: true, overlay: true });
}

#[test]
fn narrow_closed_panel_is_hidden() {
    assert_eq!(panel_mode(false, false), PanelMode::Hidden);
}

#[test]
fn styling_keeps_overlay_for_narrow_leaving_panel() {
    assert_eq!(panel_styling(false, false), PanelStyling { docked: false, overlay: true });
    assert_eq!(panel_styling(false, true), PanelStyling { docked: true, overlay: false });
    assert_eq!(panel_styling(true, true), PanelStyling { docked: true, overlay: true });
    assert_eq!(panel_styling(true, false), PanelStyling { docked: false, overlay: true });
}

#[test]
fn docked_width_widens_above_wide_breakpoint() {
    assert_eq!(docked_panel_width_px(false), 280);
    assert_eq!(docked_panel_width_px(true), 360);
}

// =============================================================
// PanelTransition
// =============================================================

#[test]
fn transition_starts_settled() {
    assert_eq!(PanelTransition::new(true).phase(), TransitionPhase::Entered);
    assert_eq!(PanelTransition::new(false).phase(), TransitionPhase::Left);
    assert!(!PanelTransition::new(false).is_mounted());
}

#[test]
fn show_enters_then_settles() {
    let mut t = PanelTransition::new(false);
    let generation = t.set_show(true).unwrap();
    assert_eq!(t.phase(), TransitionPhase::Entering);
    assert!(t.is_mounted());
    assert!(t.finish(generation));
    assert_eq!(t.phase(), TransitionPhase::Entered);
}

#[test]
fn hide_stays_mounted_until_leave_finishes() {
    let mut t = PanelTransition::new(true);
    let generation = t.set_show(false).unwrap();
    assert_eq!(t.phase(), TransitionPhase::Leaving);
    assert!(t.is_mounted());
    assert!(t.finish(generation));
    assert!(!t.is_mounted());
}

#[test]
fn repeated_show_does_not_restart_transition() {
    let mut t = PanelTransition::new(true);
    assert_eq!(t.set_show(true), None);
    assert_eq!(t.generation(), 0);
}

#[test]
fn rapid_toggle_last_state_wins() {
    let mut t = PanelTransition::new(true);
    let leave = t.set_show(false).unwrap();
    let enter = t.set_show(true).unwrap();
    assert!(enter > leave);

    // The stale leave timer fires first and must not unmount the panel.
    assert!(!t.finish(leave));
    assert_eq!(t.phase(), TransitionPhase::Entering);

    assert!(t.finish(enter));
    assert_eq!(t.phase(), TransitionPhase::Entered);
}

#[test]
fn finish_on_settled_phase_is_no_op() {
    let mut t = PanelTransition::new(true);
    assert!(!t.finish(0));
    assert_eq!(t.phase(), TransitionPhase::Entered);
}

#[test]
fn css_modifier_tracks_phase() {
    let mut t = PanelTransition::new(false);
    assert_eq!(t.css_modifier(), "chat-layout__panel--left");
    t.set_show(true);
    assert_eq!(t.css_modifier(), "chat-layout__panel--entering");
}
