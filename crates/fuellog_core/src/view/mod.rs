//! Presentation state the UI adapter renders.
//!
//! # Responsibility
//! - Track which content section is visible and which tab is active.
//! - Track the sync status indicator.
//!
//! # Invariants
//! - Exactly one section is visible and exactly one tab is active, and they
//!   belong to the same section.

mod tabs;

pub use tabs::{Section, TabBar};

use crate::sync::ConnectionState;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    UnknownTab(String),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTab(id) => write!(f, "unknown tab: {id}"),
        }
    }
}

impl Error for ViewError {}

/// Sync status indicator text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncIndicator {
    /// The connectivity probe has not resolved yet.
    #[default]
    Connecting,
    Resolved(ConnectionState),
}

impl SyncIndicator {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Resolved(state) => state.as_str(),
        }
    }
}

impl Display for SyncIndicator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
