//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`params`, `conversation`, `agents`, etc.) so
//! components depend on small focused models. `stores` bundles the reactive
//! handles that the chat view passes around.

pub mod agents;
pub mod banner;
pub mod conversation;
pub mod deployments;
pub mod experimental;
pub mod params;
pub mod stores;
pub mod tools;
pub mod ui;
