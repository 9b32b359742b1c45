//! Dataset loading.
//!
//! The three CSV tables are read once at startup into typed rows and never
//! mutated afterwards. Structural problems (missing file, missing column,
//! unparseable row) are fatal and surface as [`DataError`].

mod schema;

pub use schema::*;

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Encounter, Lab, Patient};

/// Dataset loading errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Table '{table}' is missing required column '{column}'")]
    MissingColumn { table: TableKind, column: &'static str },

    #[error("Duplicate patient_id '{patient_id}' in table 'patients'")]
    DuplicatePatientId { patient_id: String },

    #[error("Malformed row in table '{table}': {source}")]
    Csv {
        table: TableKind,
        #[source]
        source: csv::Error,
    },
}

pub type DataResult<T> = Result<T, DataError>;

/// Read-only table set shared by the query library and the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    patients: Vec<Patient>,
    encounters: Vec<Encounter>,
    labs: Vec<Lab>,
}

impl Tables {
    /// Build a table set from rows already in memory.
    pub fn from_rows(patients: Vec<Patient>, encounters: Vec<Encounter>, labs: Vec<Lab>) -> Self {
        Self {
            patients,
            encounters,
            labs,
        }
    }

    /// Load `patients.csv`, `encounters.csv` and `labs.csv` from a directory.
    pub fn load<P: AsRef<Path>>(dir: P) -> DataResult<Self> {
        let dir = dir.as_ref();
        let patients: Vec<Patient> = read_table_file(dir, TableKind::Patients)?;
        check_unique_ids(&patients)?;
        let encounters = read_table_file(dir, TableKind::Encounters)?;
        let labs = read_table_file(dir, TableKind::Labs)?;
        Ok(Self::from_rows(patients, encounters, labs))
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }

    pub fn labs(&self) -> &[Lab] {
        &self.labs
    }

    /// Tables in load order.
    pub fn kinds(&self) -> impl Iterator<Item = TableKind> {
        TableKind::ALL.into_iter()
    }

    /// Table names in load order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.kinds().map(TableKind::name)
    }

    /// Row count of a table.
    pub fn len(&self, kind: TableKind) -> usize {
        match kind {
            TableKind::Patients => self.patients.len(),
            TableKind::Encounters => self.encounters.len(),
            TableKind::Labs => self.labs.len(),
        }
    }

    /// Look up a patient by exact id.
    pub fn patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.patient_id == patient_id)
    }
}

/// Load the table set from a directory.
pub fn load_tables<P: AsRef<Path>>(dir: P) -> DataResult<Tables> {
    Tables::load(dir)
}

/// `patient_id` is the key of the patients table; a repeat makes lookups ambiguous.
fn check_unique_ids(patients: &[Patient]) -> DataResult<()> {
    let mut seen = HashSet::new();
    for patient in patients {
        if !seen.insert(patient.patient_id.as_str()) {
            return Err(DataError::DuplicatePatientId {
                patient_id: patient.patient_id.clone(),
            });
        }
    }
    Ok(())
}

fn read_table_file<T: DeserializeOwned>(dir: &Path, kind: TableKind) -> DataResult<Vec<T>> {
    let path = dir.join(kind.file_name());
    let file = File::open(&path).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;
    let rows = read_table(file, kind)?;
    tracing::info!(table = %kind, rows = rows.len(), path = %path.display(), "loaded table");
    Ok(rows)
}

/// Read one table from any CSV source, checking the header first.
pub fn read_table<T: DeserializeOwned, R: Read>(source: R, kind: TableKind) -> DataResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let headers = reader
        .headers()
        .map_err(|source| DataError::Csv { table: kind, source })?
        .clone();
    for &column in kind.columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn {
                table: kind,
                column,
            });
        }
    }

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| DataError::Csv { table: kind, source })
}
