//! Compiled routing patterns.
//!
//! All patterns are case-insensitive substring searches. Digits are matched
//! as ASCII `[0-9]` so identifiers never pick up other numeral systems.

use regex::Regex;

/// Regular expressions for each routing rule, in priority order.
pub struct Patterns {
    /// "list tables" / "show tables"
    pub list_tables: Regex,
    /// "schema" or "columns" as whole words
    pub schema: Regex,
    /// "summary P001"
    pub summary: Regex,
    /// "latest A1C for P001"
    pub latest_lab: Regex,
    /// "patients with ICD10 E11.9" (sub-code allowed)
    pub icd10_phrase: Regex,
    /// "ICD 10 ... E11" anywhere after the keyword
    pub icd10_search: Regex,
    /// "find patient <rest of line>"
    pub find_patient: Regex,
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            list_tables: compile(r"(?i)\b(?:list|show)\s+tables\b"),
            schema: compile(r"(?i)\b(?:schema|columns)\b"),
            summary: compile(r"(?i)\bsummary\s+(P[0-9]+)\b"),
            latest_lab: compile(r"(?i)\blatest\s+([A-Z0-9]+)\s+for\s+(P[0-9]+)\b"),
            icd10_phrase: compile(
                r"(?i)\bpatients\s+with\s+ICD\s*10\s+([A-Z][0-9]{2}(?:\.[A-Z0-9]+)?)\b",
            ),
            icd10_search: compile(r"(?i)\bICD\s*10\b.*\b([A-Z][0-9]{2})\b"),
            find_patient: compile(r"(?i)\bfind\s+patient\s+(.+)$"),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    // Patterns are literals above; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid routing pattern {pattern:?}: {e}"))
}
