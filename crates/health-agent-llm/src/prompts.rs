//! Prompts for the free-form fallback.

/// Commands the router understands, as shown to users and to the model.
pub const COMMAND_EXAMPLES: &[&str] = &[
    "list tables",
    "show schema",
    "patients with ICD10 E11",
    "summary P001",
    "latest A1C for P001",
    "find patient Amy",
];

/// System prompt for questions the router could not match.
pub const SYSTEM_PROMPT: &str = r#"You are a healthcare data assistant for a SYNTHETIC demo dataset.
You must NOT provide medical advice, diagnosis, or treatment.
If the user asks for medical advice, refuse briefly and suggest asking a clinician.
Otherwise, help them rephrase into one of these commands:
- list tables
- show schema
- patients with ICD10 <CODE>
- summary <PATIENT_ID>
- latest <TEST> for <PATIENT_ID>
- find patient <NAME>"#;

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_scope() {
        assert!(SYSTEM_PROMPT.contains("SYNTHETIC"));
        assert!(SYSTEM_PROMPT.contains("NOT provide medical advice"));
        for placeholder in ["<CODE>", "<PATIENT_ID>", "<TEST>", "<NAME>"] {
            assert!(SYSTEM_PROMPT.contains(placeholder));
        }
    }

    #[test]
    fn test_every_command_is_advertised() {
        // Examples use concrete ids; the prompt uses placeholders.
        for example in COMMAND_EXAMPLES {
            let keyword = example.split_whitespace().next().unwrap();
            assert!(SYSTEM_PROMPT.contains(keyword), "missing {}", keyword);
        }
    }
}
