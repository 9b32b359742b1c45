//! Lab result models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One lab result. `patient_id` is not required to exist in the patients table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lab {
    /// Patient the result belongs to
    pub patient_id: String,
    /// Collection date
    pub date: NaiveDate,
    /// Test identifier (e.g. "A1C"), compared case-insensitively
    pub test: String,
    /// Measured value
    pub value: f64,
    /// Unit of the value (e.g. "%", "mg/dL")
    pub unit: String,
}

impl Lab {
    pub const COLUMNS: &'static [&'static str] = &["patient_id", "date", "test", "value", "unit"];

    pub fn new(patient_id: &str, date: NaiveDate, test: &str, value: f64, unit: &str) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            date,
            test: test.to_string(),
            value,
            unit: unit.to_string(),
        }
    }

    /// Whether this row is the given test, ignoring case.
    pub fn is_test(&self, test: &str) -> bool {
        self.test.to_uppercase() == test.to_uppercase()
    }

    /// Value rendered with at least one decimal place.
    pub fn display_value(&self) -> String {
        format_value(self.value)
    }
}

/// Format a numeric value the way the dataset shows it: `6` → `6.0`, `6.15` → `6.15`.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
