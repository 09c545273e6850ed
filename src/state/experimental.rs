#[cfg(test)]
#[path = "experimental_test.rs"]
mod experimental_test;

use std::collections::HashMap;

pub const USE_EXPERIMENTAL_LANGCHAIN: &str = "USE_EXPERIMENTAL_LANGCHAIN";

pub const LANGCHAIN_ADVISORY: &str = "You are using an experimental langchain multihop flow. There will be bugs.";

/// Experimental feature flags as served by `/v1/experimental_features/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExperimentalFeatures {
    pub flags: HashMap<String, bool>,
}

impl ExperimentalFeatures {
    /// Unknown flags read as off.
    pub fn is_enabled(&self, flag: &str) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }

    pub fn langchain_mode(&self) -> bool {
        self.is_enabled(USE_EXPERIMENTAL_LANGCHAIN)
    }
}

/// Load state for the flag map; `features` stays `None` until the first fetch lands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExperimentalState {
    pub features: Option<ExperimentalFeatures>,
    pub error: Option<String>,
}

impl ExperimentalState {
    pub fn langchain_mode(&self) -> bool {
        self.features.as_ref().is_some_and(ExperimentalFeatures::langchain_mode)
    }
}
