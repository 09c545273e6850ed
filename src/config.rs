//! Client configuration resolved at build time.
//!
//! The browser bundle has no process environment, so the API base URL is
//! baked in from `ASSISTANTS_API_URL` when the crate is compiled. Layout
//! constants live here so the panel policy and its tests share one source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Viewport width (px) at which the layout switches to the docked panel.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;
/// Viewport width (px) at which the docked panel widens.
pub const WIDE_BREAKPOINT_PX: f64 = 1024.0;

pub const DOCKED_PANEL_WIDTH_PX: u32 = 280;
pub const DOCKED_PANEL_WIDE_WIDTH_PX: u32 = 360;

pub const PANEL_TRANSITION_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub desktop_breakpoint_px: f64,
    pub wide_breakpoint_px: f64,
    pub panel_transition_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: normalize_base_url(option_env!("ASSISTANTS_API_URL")),
            desktop_breakpoint_px: DESKTOP_BREAKPOINT_PX,
            wide_breakpoint_px: WIDE_BREAKPOINT_PX,
            panel_transition_ms: PANEL_TRANSITION_MS,
        }
    }
}

impl ClientConfig {
    /// Join an API path (leading `/`) onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn normalize_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}
