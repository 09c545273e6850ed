//! Single-slot banner channel plus the edge-triggered advisory latch.
//!
//! The banner holds at most one message; a newer message replaces the old.
//! `BannerLatch` turns a level signal (a feature flag) into one post per
//! off-to-on transition.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    pub message: Option<String>,
}

impl BannerState {
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BannerLatch {
    active: bool,
}

impl BannerLatch {
    /// Feed the current flag value; returns `true` when the banner should be
    /// posted (the flag just turned on).
    pub fn observe(&mut self, enabled: bool) -> bool {
        let fire = enabled && !self.active;
        self.active = enabled;
        fire
    }
}
