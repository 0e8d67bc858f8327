//! Cloud backend connectivity.
//!
//! # Responsibility
//! - Probe the optional sync backend once at startup.
//! - Report a binary online/offline state for the status indicator.
//!
//! # Invariants
//! - `connect` never errors and never panics; every failure is `Offline`.
//! - `connect` is bounded by a timeout.
//! - No entry data travels through this module.

mod backend;

pub use backend::{DisabledSyncBackend, HttpSyncBackend, SyncBackend};

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Online,
    Offline,
}

impl ConnectionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl Display for ConnectionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
