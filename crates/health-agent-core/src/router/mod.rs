//! Deterministic router from free text to a [`Tool`].
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. `list tables` / `show tables`
//! 2. `schema` / `columns`
//! 3. `summary P001`
//! 4. `latest A1C for P001`
//! 5. `patients with ICD10 E11.9`, else `ICD10 ... E11`
//! 6. `find patient <name fragment>`
//!
//! Identifiers (patient ids, test names, ICD-10 codes) are upper-cased; name
//! fragments keep their case. Anything else is no match and goes to the
//! language-model fallback.

mod patterns;

pub use patterns::Patterns;

use std::collections::BTreeMap;

use crate::tools::Tool;

/// Rule-based router.
#[derive(Default)]
pub struct Router {
    patterns: Patterns,
}

impl Router {
    pub fn new() -> Self {
        Self {
            patterns: Patterns::new(),
        }
    }

    /// Classify one line of input. `None` means no rule matched.
    pub fn route(&self, text: &str) -> Option<Tool> {
        let text = text.trim();
        let tool = self.classify(text);

        match &tool {
            Some(tool) => tracing::debug!(tool = tool.name(), "routed input to tool"),
            None => tracing::debug!("no routing rule matched"),
        }
        tool
    }

    /// Same as [`Router::route`], as a `(name, arguments)` pair.
    pub fn route_parts(&self, text: &str) -> (Option<&'static str>, BTreeMap<String, String>) {
        match self.route(text) {
            Some(tool) => (Some(tool.name()), tool.arguments()),
            None => (None, BTreeMap::new()),
        }
    }

    fn classify(&self, text: &str) -> Option<Tool> {
        let p = &self.patterns;

        if p.list_tables.is_match(text) {
            return Some(Tool::ListTables);
        }

        if p.schema.is_match(text) {
            return Some(Tool::ShowSchema);
        }

        if let Some(caps) = p.summary.captures(text) {
            return Some(Tool::PatientSummary {
                patient_id: caps[1].to_uppercase(),
            });
        }

        if let Some(caps) = p.latest_lab.captures(text) {
            return Some(Tool::LatestLab {
                patient_id: caps[2].to_uppercase(),
                test: caps[1].to_uppercase(),
            });
        }

        if let Some(caps) = p
            .icd10_phrase
            .captures(text)
            .or_else(|| p.icd10_search.captures(text))
        {
            return Some(Tool::PatientsByIcd10 {
                icd10: caps[1].to_uppercase(),
            });
        }

        if let Some(caps) = p.find_patient.captures(text) {
            return Some(Tool::FindPatient {
                name_contains: caps[1].trim().to_string(),
            });
        }

        None
    }
}
