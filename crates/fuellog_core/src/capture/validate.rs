//! Pure validation and append steps of a submission.

use super::{CaptureError, CaptureResult, CostForm, FormField, FuelForm};
use crate::model::entry::{CostEntry, FuelEntry};

/// Parses one numeric input. Surrounding whitespace is ignored.
///
/// Empty text, non-numeric text, `NaN` and infinities are rejected.
pub fn parse_number(field: FormField, raw: &str) -> CaptureResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(CaptureError::Parse { field })
}

/// Validates a fuel form into an entry with `distance` cached.
///
/// Parse failures are reported before the meter range is checked.
pub fn validate_fuel(form: &FuelForm) -> CaptureResult<FuelEntry> {
    let start = parse_number(FormField::MeterStart, &form.meter_start)?;
    let end = parse_number(FormField::MeterEnd, &form.meter_end)?;
    let fuel = parse_number(FormField::Fuel, &form.fuel)?;
    let cost = parse_number(FormField::Cost, &form.cost)?;

    if end < start {
        return Err(CaptureError::Range { start, end });
    }
    if !(end - start).is_finite() {
        return Err(CaptureError::DistanceOverflow { start, end });
    }

    Ok(FuelEntry::new(form.date.clone(), start, end, fuel, cost))
}

/// Validates a cost form. Only the amount is checked.
pub fn validate_cost(form: &CostForm) -> CaptureResult<CostEntry> {
    let amount = parse_number(FormField::Amount, &form.amount)?;
    Ok(CostEntry::new(form.date.clone(), form.item.clone(), amount))
}

/// Returns `prior` with `entry` appended; `prior` is left untouched.
pub fn append_entry<T: Clone>(prior: &[T], entry: T) -> Vec<T> {
    let mut next = Vec::with_capacity(prior.len() + 1);
    next.extend_from_slice(prior);
    next.push(entry);
    next
}

#[cfg(test)]
mod tests {
    use super::{append_entry, parse_number, validate_cost, validate_fuel};
    use crate::capture::{CaptureError, CostForm, FormField, FuelForm};

    fn fuel_form(start: &str, end: &str, fuel: &str, cost: &str) -> FuelForm {
        FuelForm {
            date: "2024-01-01".to_string(),
            meter_start: start.to_string(),
            meter_end: end.to_string(),
            fuel: fuel.to_string(),
            cost: cost.to_string(),
        }
    }

    #[test]
    fn parse_number_accepts_trimmed_decimals() {
        assert_eq!(parse_number(FormField::Fuel, " 5.5 ").unwrap(), 5.5);
        assert_eq!(parse_number(FormField::Fuel, "-3").unwrap(), -3.0);
    }

    #[test]
    fn parse_number_rejects_blank_text_and_non_finite() {
        for raw in ["", "   ", "abc", "NaN", "inf", "-infinity", "1e400"] {
            assert_eq!(
                parse_number(FormField::Cost, raw),
                Err(CaptureError::Parse {
                    field: FormField::Cost
                }),
                "`{raw}` should be rejected"
            );
        }
    }

    #[test]
    fn validate_fuel_computes_distance() {
        let entry = validate_fuel(&fuel_form("1000", "1050", "5.5", "9.2")).unwrap();
        assert_eq!(entry.date, "2024-01-01");
        assert_eq!(entry.distance, 50.0);
        assert_eq!(entry.fuel, 5.5);
        assert_eq!(entry.cost, 9.2);
    }

    #[test]
    fn validate_fuel_allows_equal_meters() {
        let entry = validate_fuel(&fuel_form("1000", "1000", "1", "1")).unwrap();
        assert_eq!(entry.distance, 0.0);
    }

    #[test]
    fn validate_fuel_rejects_reversed_meters() {
        let err = validate_fuel(&fuel_form("1050", "1000", "5", "9")).unwrap_err();
        assert_eq!(
            err,
            CaptureError::Range {
                start: 1050.0,
                end: 1000.0
            }
        );
        assert_eq!(
            err.user_message(),
            "End meter must be greater than start meter."
        );
    }

    #[test]
    fn validate_fuel_rejects_overflowing_distance() {
        let err = validate_fuel(&fuel_form("-1e308", "1e308", "5", "9")).unwrap_err();
        assert_eq!(
            err,
            CaptureError::DistanceOverflow {
                start: -1e308,
                end: 1e308
            }
        );
        assert_eq!(err.user_message(), "Meter readings are too far apart.");
    }

    #[test]
    fn parse_failure_takes_precedence_over_range() {
        let err = validate_fuel(&fuel_form("1050", "1000", "x", "9")).unwrap_err();
        assert_eq!(
            err,
            CaptureError::Parse {
                field: FormField::Fuel
            }
        );
        assert_eq!(err.user_message(), "Please enter valid numbers.");
    }

    #[test]
    fn validate_cost_keeps_item_text_as_typed() {
        let form = CostForm {
            date: "2024-01-02".to_string(),
            item: "  Oil change ".to_string(),
            amount: "45".to_string(),
        };
        let entry = validate_cost(&form).unwrap();
        assert_eq!(entry.item, "  Oil change ");
        assert_eq!(entry.amount, 45.0);
    }

    #[test]
    fn validate_cost_rejects_bad_amount_with_amount_message() {
        let form = CostForm {
            date: "2024-01-02".to_string(),
            item: "Wash".to_string(),
            amount: "ten".to_string(),
        };
        let err = validate_cost(&form).unwrap_err();
        assert_eq!(err.user_message(), "Please enter a valid amount.");
    }

    #[test]
    fn append_entry_leaves_prior_untouched() {
        let prior = vec![1, 2];
        let next = append_entry(&prior, 3);
        assert_eq!(prior, vec![1, 2]);
        assert_eq!(next, vec![1, 2, 3]);
    }
}
