//! Whole-collection load/save over a `KeyValueStore`.

use super::{KeyValueStore, StoreResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key of the fuel entry collection.
pub const FUEL_RECORDS_KEY: &str = "fuelRecords";
/// Storage key of the cost entry collection.
pub const COST_RECORDS_KEY: &str = "costRecords";

/// Reads the collection stored under `key`.
///
/// Fails soft: an absent key, a read error or unparsable JSON all return an
/// empty vector. Failures are logged, not returned.
pub fn load_records<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get_value(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("event=records_load module=store status=empty key={key}");
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=records_load module=store status=error key={key} reason=read error={err}"
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(records) => {
            debug!(
                "event=records_load module=store status=ok key={key} count={}",
                records.len()
            );
            records
        }
        Err(err) => {
            warn!(
                "event=records_load module=store status=degraded key={key} reason=corrupt at={}:{}",
                err.line(),
                err.column()
            );
            Vec::new()
        }
    }
}

/// Serializes all of `records` and replaces the value stored under `key`.
pub fn save_records<T, S>(store: &S, key: &str, records: &[T]) -> StoreResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(records)?;
    store.set_value(key, &encoded)?;
    debug!(
        "event=records_save module=store status=ok key={key} count={}",
        records.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_records, save_records};
    use crate::db::open_db_in_memory;
    use crate::model::entry::CostEntry;
    use crate::store::{KeyValueStore, SqliteKeyValueStore};

    fn store() -> SqliteKeyValueStore {
        SqliteKeyValueStore::new(open_db_in_memory().unwrap())
    }

    #[test]
    fn corrupt_value_loads_as_empty() {
        let store = store();
        store.set_value("costRecords", "{not json").unwrap();
        let loaded: Vec<CostEntry> = load_records(&store, "costRecords");
        assert!(loaded.is_empty());
    }

    #[test]
    fn wrong_shape_loads_as_empty() {
        let store = store();
        store.set_value("costRecords", r#"{"date":"x"}"#).unwrap();
        let loaded: Vec<CostEntry> = load_records(&store, "costRecords");
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_stores_json_array_text() {
        let store = store();
        let records = vec![CostEntry::new("2024-01-02", "Oil change", 45.0)];
        save_records(&store, "costRecords", &records).unwrap();

        let raw = store.get_value("costRecords").unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"date":"2024-01-02","item":"Oil change","amount":45.0}]"#
        );
    }
}
