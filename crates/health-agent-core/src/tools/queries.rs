//! Read-only queries over the table set.
//!
//! Every query returns display text. Empty results are a normal outcome and
//! come back as an explanatory sentence, never as an error.

use std::collections::HashSet;

use super::render::TextTable;
use crate::data::Tables;
use crate::models::{Encounter, Lab, Patient};

/// Rows shown per section in a patient summary.
pub const SUMMARY_LIMIT: usize = 5;

/// Table names, sorted alphabetically.
pub fn list_tables(tables: &Tables) -> String {
    let mut names: Vec<&str> = tables.names().collect();
    names.sort_unstable();
    format!("Available tables: {}", names.join(", "))
}

/// One line per table, in load order: `name: col1, col2, ...`.
pub fn show_schema(tables: &Tables) -> String {
    tables
        .kinds()
        .map(|kind| format!("{}: {}", kind.name(), kind.columns().join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Patients whose name contains `name_contains`, ignoring case.
pub fn find_patient(tables: &Tables, name_contains: &str) -> String {
    let matches: Vec<&Patient> = tables
        .patients()
        .iter()
        .filter(|p| p.name_contains(name_contains))
        .collect();

    if matches.is_empty() {
        return format!("No patients found matching '{}'.", name_contains);
    }
    patient_table(&matches).render()
}

/// Distinct patients with at least one encounter coded exactly `icd10`.
pub fn patients_by_icd10(tables: &Tables, icd10: &str) -> String {
    let hits: HashSet<&str> = tables
        .encounters()
        .iter()
        .filter(|e| e.icd10 == icd10)
        .map(|e| e.patient_id.as_str())
        .collect();

    // Inner join in patients-table order; orphaned encounters drop out here.
    let matches: Vec<&Patient> = tables
        .patients()
        .iter()
        .filter(|p| hits.contains(p.patient_id.as_str()))
        .collect();

    if matches.is_empty() {
        return format!("No patients found with ICD-10 '{}'.", icd10);
    }
    patient_table(&matches).render()
}

/// Most recent result of `test` for a patient.
///
/// When several rows share the latest date, the one appearing first in the
/// labs file wins.
///
/// An unknown patient and a known patient without that test get the same
/// "No lab" text; only [`patient_summary`] tells the two apart.
pub fn latest_lab(tables: &Tables, patient_id: &str, test: &str) -> String {
    let latest = tables
        .labs()
        .iter()
        .filter(|lab| lab.patient_id == patient_id && lab.is_test(test))
        .fold(None::<&Lab>, |best, lab| match best {
            Some(best) if best.date >= lab.date => Some(best),
            _ => Some(lab),
        });

    match latest {
        Some(lab) => format!(
            "{} latest {} = {} {} on {}",
            patient_id,
            lab.test,
            lab.display_value(),
            lab.unit,
            lab.date
        ),
        None => format!("No lab '{}' found for {}.", test, patient_id),
    }
}

/// Header line plus the most recent encounters and labs for one patient.
pub fn patient_summary(tables: &Tables, patient_id: &str) -> String {
    let Some(patient) = tables.patient(patient_id) else {
        return format!("Unknown patient_id: {}", patient_id);
    };

    let encounters = most_recent(
        tables.encounters().iter().filter(|e| e.patient_id == patient_id),
        |e: &&Encounter| e.date,
    );
    let labs = most_recent(
        tables.labs().iter().filter(|l| l.patient_id == patient_id),
        |l: &&Lab| l.date,
    );

    let mut encounter_table = TextTable::new(&["date", "visit_type", "icd10"]);
    for e in &encounters {
        encounter_table.push_row(vec![e.date.to_string(), e.visit_type.clone(), e.icd10.clone()]);
    }

    let mut lab_table = TextTable::new(&["date", "test", "value", "unit"]);
    for l in &labs {
        lab_table.push_row(vec![
            l.date.to_string(),
            l.test.clone(),
            l.display_value(),
            l.unit.clone(),
        ]);
    }

    let parts = [
        format!(
            "Patient: {} | {} | {} | DOB {}",
            patient.patient_id,
            patient.display_name(),
            patient.sex,
            patient.dob
        ),
        format!("\nRecent encounters (max {}):", SUMMARY_LIMIT),
        table_or_none(&encounter_table),
        format!("\nRecent labs (max {}):", SUMMARY_LIMIT),
        table_or_none(&lab_table),
    ];
    parts.join("\n")
}

fn patient_table(patients: &[&Patient]) -> TextTable {
    let mut table = TextTable::new(Patient::COLUMNS);
    for p in patients {
        table.push_row(vec![
            p.patient_id.clone(),
            p.display_name().to_string(),
            p.sex.clone(),
            p.dob.to_string(),
        ]);
    }
    table
}

/// Newest first, stable for equal dates, capped at [`SUMMARY_LIMIT`].
fn most_recent<'a, T, K, I>(rows: I, date: K) -> Vec<&'a T>
where
    I: Iterator<Item = &'a T>,
    K: Fn(&&'a T) -> chrono::NaiveDate,
{
    let mut rows: Vec<&'a T> = rows.collect();
    rows.sort_by(|a, b| date(b).cmp(&date(a)));
    rows.truncate(SUMMARY_LIMIT);
    rows
}

fn table_or_none(table: &TextTable) -> String {
    if table.is_empty() {
        "None".to_string()
    } else {
        table.render()
    }
}
