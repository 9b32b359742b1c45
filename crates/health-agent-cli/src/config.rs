//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "health-agent")]
#[command(about = "Chat with a synthetic healthcare dataset (local model fallback)")]
pub struct Config {
    /// Directory holding patients.csv, encounters.csv and labs.csv
    #[arg(long, env = "HEALTH_AGENT_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Base URL of the Ollama server
    #[arg(long, env = "OLLAMA_HOST", default_value = "http://localhost:11434")]
    pub ollama_host: String,

    /// Model used for questions no command matches
    #[arg(long, env = "OLLAMA_MODEL", default_value = "llama3.1")]
    pub model: String,

    /// Timeout for one model request, in seconds
    #[arg(long, env = "OLLAMA_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,

    /// Answer a single line and exit instead of starting the prompt loop
    #[arg(long, short = 'c')]
    pub command: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "health-agent",
            "--data-dir",
            "/tmp/demo",
            "--model",
            "mistral",
            "--timeout-secs",
            "30",
            "-c",
            "list tables",
        ])
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/demo"));
        assert_eq!(config.model, "mistral");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.command.as_deref(), Some("list tables"));
    }

    #[test]
    fn test_rejects_bad_timeout() {
        assert!(Config::try_parse_from(["health-agent", "--timeout-secs", "soon"]).is_err());
    }
}
