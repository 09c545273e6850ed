//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat chrome and read/write the shared stores handed
//! to them through `ChatStores`.

pub mod agent_right_panel;
pub mod assistant_tools;
pub mod banner_bar;
pub mod conversation;
pub mod deployment_select;
pub mod toggle_card;
