//! Application context: the state every UI adapter drives.
//!
//! # Responsibility
//! - Own both entry collections, both form states, the tab bar and the sync
//!   indicator, instead of process-wide globals.
//! - Run the submit protocol `Idle -> Validating -> Committed | Rejected`.
//!
//! # Invariants
//! - Collections are loaded before the context is handed to any caller.
//! - A rejected or failed submission leaves collections, stored values and the
//!   form exactly as they were.
//! - A committed submission is persisted before it becomes visible in memory.

use crate::capture::{
    append_entry, validate_cost, validate_fuel, CaptureError, CostForm, FuelForm,
};
use crate::model::entry::{CostEntry, FuelEntry};
use crate::store::{
    load_records, save_records, KeyValueStore, StoreError, COST_RECORDS_KEY, FUEL_RECORDS_KEY,
};
use crate::sync::ConnectionState;
use crate::view::{Section, SyncIndicator, TabBar, ViewError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const FUEL_SAVED_MESSAGE: &str = "Fuel entry saved";
pub const COST_SAVED_MESSAGE: &str = "Cost entry saved";

/// Why a submission was not committed.
#[derive(Debug)]
pub enum SubmitError {
    /// Input was rejected; shown to the user as-is.
    Rejected(CaptureError),
    /// Input was valid but the collection could not be written.
    Storage(StoreError),
}

impl SubmitError {
    /// Text for the user-facing alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(err) => err.user_message().to_string(),
            Self::Storage(err) => format!("Could not save entry: {err}"),
        }
    }
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<CaptureError> for SubmitError {
    fn from(value: CaptureError) -> Self {
        Self::Rejected(value)
    }
}

impl From<StoreError> for SubmitError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

/// Result of a committed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    /// Success notification text.
    pub notice: &'static str,
    /// Collection length after the append.
    pub count: usize,
}

/// Wired application state over a key-value store.
pub struct AppContext<S: KeyValueStore> {
    store: S,
    fuel_records: Vec<FuelEntry>,
    cost_records: Vec<CostEntry>,
    fuel_form: FuelForm,
    cost_form: CostForm,
    tabs: TabBar,
    sync: SyncIndicator,
    clock: Box<dyn Fn() -> String>,
}

impl<S: KeyValueStore> AppContext<S> {
    /// Wires the context: default tab, date prefill, both collections loaded.
    ///
    /// Date inputs are filled from `today_iso`. The sync indicator starts as
    /// `connecting` until `apply_connection_state`.
    pub fn bootstrap(store: S) -> Self {
        Self::bootstrap_with_clock(store, today_iso)
    }

    /// Same as `bootstrap`, reading the current date from `clock`.
    ///
    /// `clock` is called at startup and again on every form reset.
    pub fn bootstrap_with_clock(store: S, clock: impl Fn() -> String + 'static) -> Self {
        let today = clock();
        let fuel_records: Vec<FuelEntry> = load_records(&store, FUEL_RECORDS_KEY);
        let cost_records: Vec<CostEntry> = load_records(&store, COST_RECORDS_KEY);

        info!(
            "event=app_bootstrap module=app status=ok fuel_count={} cost_count={}",
            fuel_records.len(),
            cost_records.len()
        );

        Self {
            store,
            fuel_records,
            cost_records,
            fuel_form: FuelForm::with_date(today.as_str()),
            cost_form: CostForm::with_date(today.as_str()),
            tabs: TabBar::new(),
            sync: SyncIndicator::default(),
            clock: Box::new(clock),
        }
    }

    pub fn fuel_records(&self) -> &[FuelEntry] {
        &self.fuel_records
    }

    pub fn cost_records(&self) -> &[CostEntry] {
        &self.cost_records
    }

    pub fn fuel_form(&self) -> &FuelForm {
        &self.fuel_form
    }

    pub fn fuel_form_mut(&mut self) -> &mut FuelForm {
        &mut self.fuel_form
    }

    pub fn cost_form(&self) -> &CostForm {
        &self.cost_form
    }

    pub fn cost_form_mut(&mut self) -> &mut CostForm {
        &mut self.cost_form
    }

    pub fn tabs(&self) -> &TabBar {
        &self.tabs
    }

    pub fn sync_indicator(&self) -> SyncIndicator {
        self.sync
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tab click handler: shows the section tagged `tab_id`.
    pub fn select_tab(&mut self, tab_id: &str) -> Result<Section, ViewError> {
        self.tabs.select_by_id(tab_id)
    }

    /// Continuation of the connectivity probe.
    pub fn apply_connection_state(&mut self, state: ConnectionState) {
        self.sync = SyncIndicator::Resolved(state);
        info!("event=sync_status module=app status={state}");
    }

    /// Submits the current fuel form.
    ///
    /// # Errors
    /// - `Rejected` on unparsable numbers, `end < start` or a non-finite
    ///   distance; the form stays filled.
    /// - `Storage` when the collection cannot be written; nothing changes.
    pub fn submit_fuel(&mut self) -> Result<Committed, SubmitError> {
        let entry = validate_fuel(&self.fuel_form)?;
        let next = append_entry(&self.fuel_records, entry);
        persist(&self.store, FUEL_RECORDS_KEY, &next)?;

        self.fuel_records = next;
        self.fuel_form.reset(&(self.clock)());
        Ok(Committed {
            notice: FUEL_SAVED_MESSAGE,
            count: self.fuel_records.len(),
        })
    }

    /// Submits the current cost form. Same contract as `submit_fuel`.
    pub fn submit_cost(&mut self) -> Result<Committed, SubmitError> {
        let entry = validate_cost(&self.cost_form)?;
        let next = append_entry(&self.cost_records, entry);
        persist(&self.store, COST_RECORDS_KEY, &next)?;

        self.cost_records = next;
        self.cost_form.reset(&(self.clock)());
        Ok(Committed {
            notice: COST_SAVED_MESSAGE,
            count: self.cost_records.len(),
        })
    }
}

fn persist<S, T>(store: &S, key: &str, records: &[T]) -> Result<(), StoreError>
where
    S: KeyValueStore,
    T: serde::Serialize,
{
    save_records(store, key, records).map_err(|err| {
        error!("event=records_save module=app status=error key={key} error={err}");
        err
    })?;
    info!(
        "event=entry_commit module=app status=ok key={key} count={}",
        records.len()
    );
    Ok(())
}

/// Current UTC calendar date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::{today_iso, AppContext, SubmitError};
    use crate::capture::CaptureError;
    use crate::store::{KeyValueStore, StoreError, StoreResult};
    use crate::sync::ConnectionState;
    use crate::view::SyncIndicator;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Store that can be switched to fail every write.
    #[derive(Default)]
    struct FlakyStore {
        values: RefCell<HashMap<String, String>>,
        fail_writes: bool,
    }

    impl KeyValueStore for FlakyStore {
        fn get_value(&self, key: &str) -> StoreResult<Option<String>> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set_value(&self, key: &str, value: &str) -> StoreResult<()> {
            if self.fail_writes {
                return Err(StoreError::from(rusqlite::Error::InvalidQuery));
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn fixed_date() -> String {
        "2024-06-01".to_string()
    }

    #[test]
    fn today_iso_is_a_calendar_date() {
        let today = today_iso();
        assert!(chrono::NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn bootstrap_prefills_dates_and_starts_connecting() {
        let app = AppContext::bootstrap_with_clock(FlakyStore::default(), fixed_date);
        assert_eq!(app.fuel_form().date, "2024-06-01");
        assert_eq!(app.cost_form().date, "2024-06-01");
        assert_eq!(app.sync_indicator(), SyncIndicator::Connecting);
    }

    #[test]
    fn reset_reads_the_clock_at_commit_time() {
        let day = Rc::new(Cell::new(1u32));
        let clock_day = Rc::clone(&day);
        let mut app = AppContext::bootstrap_with_clock(FlakyStore::default(), move || {
            format!("2024-06-{:02}", clock_day.get())
        });
        assert_eq!(app.cost_form().date, "2024-06-01");

        day.set(2);
        {
            let form = app.cost_form_mut();
            form.item = "Toll".to_string();
            form.amount = "2.5".to_string();
        }
        app.submit_cost().unwrap();

        assert_eq!(app.cost_records()[0].date, "2024-06-01");
        assert_eq!(app.cost_form().date, "2024-06-02");
        assert_eq!(app.fuel_form().date, "2024-06-01");
    }

    #[test]
    fn connection_state_updates_indicator() {
        let mut app = AppContext::bootstrap_with_clock(FlakyStore::default(), fixed_date);
        app.apply_connection_state(ConnectionState::Online);
        assert_eq!(app.sync_indicator().label(), "online");
    }

    #[test]
    fn storage_failure_leaves_state_and_form_unchanged() {
        let store = FlakyStore {
            fail_writes: true,
            ..FlakyStore::default()
        };
        let mut app = AppContext::bootstrap_with_clock(store, fixed_date);
        {
            let form = app.cost_form_mut();
            form.item = "Parking".to_string();
            form.amount = "3".to_string();
        }

        let err = app.submit_cost().unwrap_err();
        assert!(matches!(err, SubmitError::Storage(_)));
        assert!(app.cost_records().is_empty());
        assert_eq!(app.cost_form().item, "Parking");
        assert!(app.store().get_value("costRecords").unwrap().is_none());
    }

    #[test]
    fn rejection_keeps_form_populated() {
        let mut app = AppContext::bootstrap_with_clock(FlakyStore::default(), fixed_date);
        {
            let form = app.fuel_form_mut();
            form.meter_start = "200".to_string();
            form.meter_end = "100".to_string();
            form.fuel = "4".to_string();
            form.cost = "8".to_string();
        }

        let err = app.submit_fuel().unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Rejected(CaptureError::Range { .. })
        ));
        assert_eq!(app.fuel_form().meter_start, "200");
        assert!(app.fuel_records().is_empty());
    }
}
