//! Table names and their declared columns.

use crate::models::{Encounter, Lab, Patient};

/// The three tables of the dataset, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Patients,
    Encounters,
    Labs,
}

impl TableKind {
    /// All tables in load order.
    pub const ALL: [TableKind; 3] = [TableKind::Patients, TableKind::Encounters, TableKind::Labs];

    /// Table name, also the file stem on disk.
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Patients => "patients",
            TableKind::Encounters => "encounters",
            TableKind::Labs => "labs",
        }
    }

    /// Required columns in file order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Patients => Patient::COLUMNS,
            TableKind::Encounters => Encounter::COLUMNS,
            TableKind::Labs => Lab::COLUMNS,
        }
    }

    /// File name inside the data directory.
    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
