//! Local persistence of whole record collections.
//!
//! # Responsibility
//! - Abstract the durable key-value store behind `KeyValueStore`.
//! - Load and save entire collections as JSON text under a named key.
//!
//! # Invariants
//! - Saves always replace the full value for a key; there is no partial write.
//! - Loads never fail: missing or corrupt values read as an empty collection.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod records;
mod sqlite;

pub use records::{load_records, save_records, COST_RECORDS_KEY, FUEL_RECORDS_KEY};
pub use sqlite::SqliteKeyValueStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize records: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Durable string-to-string store.
pub trait KeyValueStore {
    fn get_value(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_value(&self, key: &str, value: &str) -> StoreResult<()>;
}
