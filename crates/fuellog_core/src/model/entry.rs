//! Fuel and cost entry records.
//!
//! # Responsibility
//! - Define the persisted shape of both entry kinds.
//! - Compute derived fields once, at construction.
//!
//! # Invariants
//! - `FuelEntry::distance == end - start` as computed when the entry was built.
//! - Serialized field names are exactly `date, start, end, distance, fuel, cost`
//!   and `date, item, amount`.

use serde::{Deserialize, Serialize};

/// One fuel fill-up with odometer readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEntry {
    /// Calendar date as typed in the form, usually `YYYY-MM-DD`.
    pub date: String,
    /// Odometer reading before the trip.
    pub start: f64,
    /// Odometer reading at fill-up. Never below `start` for captured entries.
    pub end: f64,
    /// Cached `end - start`; stored rather than recomputed.
    pub distance: f64,
    /// Fuel volume.
    pub fuel: f64,
    pub cost: f64,
}

impl FuelEntry {
    /// Builds an entry and caches `distance`.
    ///
    /// This constructor does not check `end >= start` or that `distance` is
    /// finite; capture validation does.
    pub fn new(date: impl Into<String>, start: f64, end: f64, fuel: f64, cost: f64) -> Self {
        Self {
            date: date.into(),
            start,
            end,
            distance: end - start,
            fuel,
            cost,
        }
    }
}

/// One miscellaneous vehicle cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    pub date: String,
    /// Free-text label, stored as typed.
    pub item: String,
    pub amount: f64,
}

impl CostEntry {
    pub fn new(date: impl Into<String>, item: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            item: item.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CostEntry, FuelEntry};
    use serde_json::json;

    #[test]
    fn fuel_entry_caches_distance() {
        let entry = FuelEntry::new("2024-01-01", 1000.0, 1050.0, 5.5, 9.2);
        assert_eq!(entry.distance, 50.0);
    }

    #[test]
    fn fuel_entry_serializes_with_literal_field_names() {
        let entry = FuelEntry::new("2024-01-01", 1000.0, 1050.0, 5.5, 9.2);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "date": "2024-01-01",
                "start": 1000.0,
                "end": 1050.0,
                "distance": 50.0,
                "fuel": 5.5,
                "cost": 9.2
            })
        );
    }

    #[test]
    fn fuel_entry_reads_stored_distance_without_recomputing() {
        // Integer JSON numbers are accepted as f64 too.
        let raw = r#"{"date":"2024-01-01","start":10,"end":20,"distance":7,"fuel":1,"cost":2}"#;
        let entry: FuelEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.distance, 7.0);
    }

    #[test]
    fn cost_entry_serializes_with_literal_field_names() {
        let entry = CostEntry::new("2024-01-02", "Oil change", 45.0);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({ "date": "2024-01-02", "item": "Oil change", "amount": 45.0 })
        );
    }
}
