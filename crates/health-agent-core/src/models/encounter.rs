//! Encounter models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One clinical visit. `patient_id` is not required to exist in the patients table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Encounter {
    /// Patient the visit belongs to
    pub patient_id: String,
    /// Visit date
    pub date: NaiveDate,
    /// Visit type (e.g. "checkup", "ER")
    pub visit_type: String,
    /// ICD-10 diagnosis code (e.g. "E11")
    pub icd10: String,
}

impl Encounter {
    pub const COLUMNS: &'static [&'static str] = &["patient_id", "date", "visit_type", "icd10"];

    pub fn new(patient_id: &str, date: NaiveDate, visit_type: &str, icd10: &str) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            date,
            visit_type: visit_type.to_string(),
            icd10: icd10.to_string(),
        }
    }
}
