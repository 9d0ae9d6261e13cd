//! Load state machine.
//!
//! # States
//! ```text
//! Pending → Loaded   (host reported load)
//! Pending → Errored  (host reported error)
//! ```
//! Loaded and Errored are terminal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Errored,
}

impl LoadState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, LoadState::Pending)
    }
}

/// Reported by the host when the resource finished loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadEvent {
    pub src: String,
    pub natural_width: Option<u32>,
    pub natural_height: Option<u32>,
}

impl LoadEvent {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            natural_width: None,
            natural_height: None,
        }
    }
}

/// Reported by the host when the resource could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub src: String,
    pub reason: Option<String>,
}

impl ErrorEvent {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
