//! The closed set of query tools and the dispatcher that runs them.
//!
//! Router output is a [`Tool`] carrying typed arguments, so dispatch is an
//! exhaustive match. [`run_named`] accepts the untyped `(name, arguments)`
//! form for callers that hold a tool call from outside the router.

mod queries;
mod render;

pub use queries::*;
pub use render::TextTable;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::data::Tables;

/// Errors turning an external `(name, arguments)` pair into a [`Tool`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing argument '{argument}' for {tool}")]
    MissingArgument {
        tool: &'static str,
        argument: &'static str,
    },
}

/// One of the six supported queries with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    ListTables,
    ShowSchema,
    FindPatient { name_contains: String },
    PatientsByIcd10 { icd10: String },
    LatestLab { patient_id: String, test: String },
    PatientSummary { patient_id: String },
}

impl Tool {
    /// Wire names of every tool.
    pub const NAMES: [&'static str; 6] = [
        "list_tables",
        "show_schema",
        "find_patient",
        "patients_by_icd10",
        "latest_lab",
        "patient_summary",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::ListTables => "list_tables",
            Tool::ShowSchema => "show_schema",
            Tool::FindPatient { .. } => "find_patient",
            Tool::PatientsByIcd10 { .. } => "patients_by_icd10",
            Tool::LatestLab { .. } => "latest_lab",
            Tool::PatientSummary { .. } => "patient_summary",
        }
    }

    /// Arguments as a string mapping.
    pub fn arguments(&self) -> BTreeMap<String, String> {
        let pairs: Vec<(&str, &str)> = match self {
            Tool::ListTables | Tool::ShowSchema => vec![],
            Tool::FindPatient { name_contains } => vec![("name_contains", name_contains.as_str())],
            Tool::PatientsByIcd10 { icd10 } => vec![("icd10", icd10.as_str())],
            Tool::LatestLab { patient_id, test } => {
                vec![("patient_id", patient_id.as_str()), ("test", test.as_str())]
            }
            Tool::PatientSummary { patient_id } => vec![("patient_id", patient_id.as_str())],
        };
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Parse an untyped tool call. Extra arguments are ignored.
    pub fn from_parts(name: &str, args: &BTreeMap<String, String>) -> Result<Self, ToolError> {
        let tool = match name {
            "list_tables" => Tool::ListTables,
            "show_schema" => Tool::ShowSchema,
            "find_patient" => Tool::FindPatient {
                name_contains: required(args, "find_patient", "name_contains")?,
            },
            "patients_by_icd10" => Tool::PatientsByIcd10 {
                icd10: required(args, "patients_by_icd10", "icd10")?,
            },
            "latest_lab" => Tool::LatestLab {
                patient_id: required(args, "latest_lab", "patient_id")?,
                test: required(args, "latest_lab", "test")?,
            },
            "patient_summary" => Tool::PatientSummary {
                patient_id: required(args, "patient_summary", "patient_id")?,
            },
            other => return Err(ToolError::UnknownTool(other.to_string())),
        };
        Ok(tool)
    }
}

fn required(
    args: &BTreeMap<String, String>,
    tool: &'static str,
    argument: &'static str,
) -> Result<String, ToolError> {
    args.get(argument)
        .cloned()
        .ok_or(ToolError::MissingArgument { tool, argument })
}

/// Run a tool against the table set.
pub fn run_tool(tables: &Tables, tool: &Tool) -> String {
    match tool {
        Tool::ListTables => list_tables(tables),
        Tool::ShowSchema => show_schema(tables),
        Tool::FindPatient { name_contains } => find_patient(tables, name_contains),
        Tool::PatientsByIcd10 { icd10 } => patients_by_icd10(tables, icd10),
        Tool::LatestLab { patient_id, test } => latest_lab(tables, patient_id, test),
        Tool::PatientSummary { patient_id } => patient_summary(tables, patient_id),
    }
}

/// Run a tool given by name. A bad call is reported as text, never as an error.
pub fn run_named(tables: &Tables, name: &str, args: &BTreeMap<String, String>) -> String {
    match Tool::from_parts(name, args) {
        Ok(tool) => run_tool(tables, &tool),
        Err(e) => {
            tracing::warn!(tool = name, error = %e, "rejected tool call");
            e.to_string()
        }
    }
}
