//! Networking modules for the assistants REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `error` classifies their failures, and
//! `types` defines the wire schema shared with the state stores.

pub mod api;
pub mod error;
pub mod types;
