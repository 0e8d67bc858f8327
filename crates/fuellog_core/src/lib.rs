//! Core logic for the fuel log.
//! This crate owns every business invariant; UI adapters stay thin.

pub mod app;
pub mod capture;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod store;
pub mod sync;
pub mod view;

pub use app::{today_iso, AppContext, Committed, SubmitError};
pub use capture::{CaptureError, CostForm, FormField, FuelForm};
pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entry::{CostEntry, FuelEntry};
pub use store::{
    load_records, save_records, KeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
    COST_RECORDS_KEY, FUEL_RECORDS_KEY,
};
pub use sync::{ConnectionState, DisabledSyncBackend, HttpSyncBackend, SyncBackend};
pub use view::{Section, SyncIndicator, TabBar, ViewError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
