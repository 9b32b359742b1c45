//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the patients table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Unique key, `P` followed by digits (e.g. "P001")
    pub patient_id: String,
    /// Display name; absent when the source cell is empty
    #[serde(deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    /// Sex as recorded (e.g. "F", "M")
    pub sex: String,
    /// Date of birth
    pub dob: NaiveDate,
}

impl Patient {
    /// Column names in file order.
    pub const COLUMNS: &'static [&'static str] = &["patient_id", "name", "sex", "dob"];

    /// Create a patient row.
    pub fn new(patient_id: &str, name: &str, sex: &str, dob: NaiveDate) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            name: Some(name.to_string()),
            sex: sex.to_string(),
            dob,
        }
    }

    /// Name for display; empty when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Case-insensitive substring match on the name. Absent names never match.
    pub fn name_contains(&self, fragment: &str) -> bool {
        match &self.name {
            Some(name) => name.to_lowercase().contains(&fragment.to_lowercase()),
            None => false,
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap()
    }

    #[test]
    fn test_name_contains_ignores_case() {
        let patient = Patient::new("P001", "Amy Chen", "F", dob());
        assert!(patient.name_contains("amy"));
        assert!(patient.name_contains("AMY"));
        assert!(patient.name_contains("y Ch"));
        assert!(!patient.name_contains("Bob"));
    }

    #[test]
    fn test_missing_name_never_matches() {
        let mut patient = Patient::new("P001", "Amy Chen", "F", dob());
        patient.name = None;
        assert!(!patient.name_contains("a"));
        assert_eq!(patient.display_name(), "");
    }
}
