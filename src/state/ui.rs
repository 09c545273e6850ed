//! Viewport and auxiliary-panel presentation state.
//!
//! DESIGN
//! ======
//! Panel presentation is derived, never stored: `panel_mode` maps the open
//! flag and breakpoint onto one of four modes. Only the enter/leave
//! animation needs memory, and `PanelTransition` keeps just its phase plus a
//! generation counter so timer callbacks from superseded toggles are ignored.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::config::{DOCKED_PANEL_WIDE_WIDTH_PX, DOCKED_PANEL_WIDTH_PX};

/// Breakpoint flags derived from the window width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportState {
    pub is_desktop: bool,
    pub is_wide: bool,
}

impl Default for ViewportState {
    // SSR has no window; render the desktop layout so hydration on the
    // common case does not shift the panel.
    fn default() -> Self {
        Self { is_desktop: true, is_wide: true }
    }
}

impl ViewportState {
    pub fn from_width(width_px: f64, desktop_breakpoint_px: f64, wide_breakpoint_px: f64) -> Self {
        Self {
            is_desktop: width_px >= desktop_breakpoint_px,
            is_wide: width_px >= wide_breakpoint_px,
        }
    }
}

/// How the agent panel is presented next to the chat content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelMode {
    /// Not mounted.
    Hidden,
    /// Fixed-width column beside the content.
    Docked,
    /// Covers the whole layout area.
    Overlay,
    /// Desktop column explicitly opened; carries both docked and overlay styling.
    DockedOverlay,
}

impl PanelMode {
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }
}

pub fn panel_mode(is_open: bool, is_desktop: bool) -> PanelMode {
    match (is_desktop, is_open) {
        (true, false) => PanelMode::Docked,
        (true, true) => PanelMode::DockedOverlay,
        (false, true) => PanelMode::Overlay,
        (false, false) => PanelMode::Hidden,
    }
}

/// CSS flags for the panel element.
///
/// Computed from the raw inputs rather than `PanelMode`: a panel leaving on a
/// narrow viewport has mode `Hidden` but must keep its overlay styling until
/// the leave transition completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelStyling {
    pub docked: bool,
    pub overlay: bool,
}

pub fn panel_styling(is_open: bool, is_desktop: bool) -> PanelStyling {
    PanelStyling { docked: is_desktop, overlay: is_open || !is_desktop }
}

pub fn docked_panel_width_px(is_wide: bool) -> u32 {
    if is_wide { DOCKED_PANEL_WIDE_WIDTH_PX } else { DOCKED_PANEL_WIDTH_PX }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Entering,
    Entered,
    Leaving,
    Left,
}

/// Mount/unmount animation for the agent panel.
///
/// `set_show` starts a transition and returns its generation; the caller
/// schedules `finish(generation)` after the transition duration. A newer
/// `set_show` bumps the generation, so a late `finish` for an older one is a
/// no-op and the last requested state wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelTransition {
    phase: TransitionPhase,
    generation: u64,
}

impl PanelTransition {
    /// Initial state; a panel that starts visible does not animate in.
    pub fn new(show: bool) -> Self {
        let phase = if show { TransitionPhase::Entered } else { TransitionPhase::Left };
        Self { phase, generation: 0 }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_show(&mut self, show: bool) -> Option<u64> {
        let next = match (show, self.phase) {
            (true, TransitionPhase::Left | TransitionPhase::Leaving) => TransitionPhase::Entering,
            (false, TransitionPhase::Entered | TransitionPhase::Entering) => TransitionPhase::Leaving,
            _ => return None,
        };
        self.phase = next;
        self.generation += 1;
        Some(self.generation)
    }

    /// Complete the transition started as `generation`. Returns `true` when
    /// the phase changed.
    pub fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = match self.phase {
            TransitionPhase::Entering => TransitionPhase::Entered,
            TransitionPhase::Leaving => TransitionPhase::Left,
            TransitionPhase::Entered | TransitionPhase::Left => return false,
        };
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != TransitionPhase::Left
    }

    /// BEM modifier for the current phase.
    pub fn css_modifier(&self) -> &'static str {
        match self.phase {
            TransitionPhase::Entering => "chat-layout__panel--entering",
            TransitionPhase::Entered => "chat-layout__panel--entered",
            TransitionPhase::Leaving => "chat-layout__panel--leaving",
            TransitionPhase::Left => "chat-layout__panel--left",
        }
    }
}
