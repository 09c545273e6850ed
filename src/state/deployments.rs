//! Deployment registry cache and the default-selection rule.
//!
//! `items == None` means the list has not loaded yet; `Some(vec![])` means
//! the registry answered with nothing. The two are handled differently only
//! in the UI; the selection rule treats both as "nothing to pick".

#[cfg(test)]
#[path = "deployments_test.rs"]
mod deployments_test;

use crate::net::types::Deployment;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeploymentsState {
    pub items: Option<Vec<Deployment>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DeploymentsState {
    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    /// Entries a user can select: available and named.
    pub fn available(&self) -> impl Iterator<Item = &Deployment> {
        self.items.iter().flatten().filter(|d| d.is_available && !d.name.is_empty())
    }
}

/// Deployment to select when none is selected yet.
///
/// Returns `None` when a selection already exists (it is never overridden),
/// when the list has not loaded, or when no entry is available. Otherwise the
/// first available entry in list order. Entries with a blank name are skipped:
/// a blank selection reads back as "unset" and would be picked again on every
/// pass. Safe to call repeatedly.
pub fn select_default_deployment(current: Option<&str>, all: Option<&[Deployment]>) -> Option<String> {
    if current.is_some_and(|name| !name.is_empty()) {
        return None;
    }
    all?.iter().find(|d| d.is_available && !d.name.is_empty()).map(|d| d.name.clone())
}
