//! Responsive breakpoint tracking.
//!
//! Reads `window.innerWidth` once on mount and again on every `resize`,
//! writing the derived `ViewportState` into the shared store. Requires a
//! browser environment; SSR keeps the default desktop state.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::ui::ViewportState;

/// Keep `viewport` in sync with the window width for the current owner's lifetime.
pub fn install_viewport_tracking(viewport: RwSignal<ViewportState>, config: &ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        let desktop = config.desktop_breakpoint_px;
        let wide = config.wide_breakpoint_px;
        let measure = move || {
            let Some(width) = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
            else {
                return;
            };
            let next = ViewportState::from_width(width, desktop, wide);
            if viewport.get_untracked() != next {
                viewport.set(next);
            }
        };
        measure();
        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (viewport, config);
    }
}
