//! Timer-driven enter/leave transitions.
//!
//! TRADE-OFFS
//! ==========
//! The transition is a CSS class swap plus a timeout rather than an
//! `animationend` listener: the timeout always fires, so a panel interrupted
//! mid-animation still settles. Stale timeouts are filtered by generation in
//! `PanelTransition::finish`.

use leptos::prelude::*;

use crate::state::ui::PanelTransition;

/// Track `show` and animate between mounted and unmounted.
///
/// The returned signal reports the current phase; render the panel while
/// `is_mounted()` and apply `css_modifier()` to it.
pub fn use_panel_transition<F>(show: F, duration_ms: u32) -> RwSignal<PanelTransition>
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    let transition = RwSignal::new(PanelTransition::new(untrack(&show)));

    Effect::new(move || {
        let visible = show();
        if let Some(generation) = transition.try_update(|t| t.set_show(visible)).flatten() {
            schedule_finish(transition, generation, duration_ms);
        }
    });

    transition
}

fn schedule_finish(transition: RwSignal<PanelTransition>, generation: u64, duration_ms: u32) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        // The owner may be gone by now; a disposed signal is simply skipped.
        let _ = transition.try_update(|t| t.finish(generation));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration_ms;
        let _ = transition.try_update(|t| t.finish(generation));
    }
}
