//! Record capture: raw form input to validated entries.
//!
//! # Responsibility
//! - Hold the raw text state of the fuel and cost forms.
//! - Turn a submitted form into an entry, or a user-facing rejection.
//!
//! # Invariants
//! - Validation is all-or-nothing and happens before any state changes.
//! - Every numeric field must parse to a finite number.
//! - A fuel entry's end meter is never below its start meter.
//! - A fuel entry's distance is finite, so it survives JSON persistence.

mod form;
mod validate;

pub use form::{CostForm, FuelForm};
pub use validate::{append_entry, parse_number, validate_cost, validate_fuel};

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CaptureResult<T> = Result<T, CaptureError>;

/// Form field names, used to report which input failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    MeterStart,
    MeterEnd,
    Fuel,
    Cost,
    Amount,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MeterStart => "meter_start",
            Self::MeterEnd => "meter_end",
            Self::Fuel => "fuel",
            Self::Cost => "cost",
            Self::Amount => "amount",
        }
    }
}

/// Rejection of a submitted form.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureError {
    /// A required numeric field is empty, non-numeric or not finite.
    Parse { field: FormField },
    /// The end meter precedes the start meter.
    Range { start: f64, end: f64 },
    /// The meters are finite but `end - start` is not.
    DistanceOverflow { start: f64, end: f64 },
}

impl CaptureError {
    /// Message shown to the user when a form is rejected.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Parse {
                field: FormField::Amount,
            } => "Please enter a valid amount.",
            Self::Parse { .. } => "Please enter valid numbers.",
            Self::Range { .. } => "End meter must be greater than start meter.",
            Self::DistanceOverflow { .. } => "Meter readings are too far apart.",
        }
    }
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { field } => write!(f, "field `{}` is not a valid number", field.as_str()),
            Self::Range { start, end } => {
                write!(f, "end meter {end} is below start meter {start}")
            }
            Self::DistanceOverflow { start, end } => {
                write!(f, "distance from {start} to {end} is not a finite number")
            }
        }
    }
}

impl Error for CaptureError {}
