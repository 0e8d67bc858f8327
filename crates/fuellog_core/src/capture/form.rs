//! Raw form state as typed by the user.

/// Fuel form inputs. Numeric fields stay as text until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuelForm {
    pub date: String,
    pub meter_start: String,
    pub meter_end: String,
    pub fuel: String,
    pub cost: String,
}

impl FuelForm {
    /// Empty form with the date prefilled.
    pub fn with_date(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// Clears every input, then refills the date.
    pub fn reset(&mut self, today: &str) {
        *self = Self::with_date(today);
    }
}

/// Cost form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostForm {
    pub date: String,
    pub item: String,
    pub amount: String,
}

impl CostForm {
    pub fn with_date(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn reset(&mut self, today: &str) {
        *self = Self::with_date(today);
    }
}

#[cfg(test)]
mod tests {
    use super::{CostForm, FuelForm};

    #[test]
    fn reset_clears_inputs_and_refills_date() {
        let mut form = FuelForm {
            date: "2020-05-05".to_string(),
            meter_start: "1".to_string(),
            meter_end: "2".to_string(),
            fuel: "3".to_string(),
            cost: "4".to_string(),
        };
        form.reset("2024-03-01");
        assert_eq!(form, FuelForm::with_date("2024-03-01"));
        assert!(form.meter_start.is_empty());

        let mut cost = CostForm::with_date("2020-05-05");
        cost.item = "Tyres".to_string();
        cost.reset("2024-03-01");
        assert_eq!(cost.date, "2024-03-01");
        assert!(cost.item.is_empty());
    }
}
