//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the policies stay testable without a window.

pub mod transition;
pub mod viewport;
