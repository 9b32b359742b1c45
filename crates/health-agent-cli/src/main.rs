//! Interactive front-end for the healthcare demo agent.

mod config;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use health_agent_core::{load_tables, Agent};
use health_agent_llm::{LlmClient, OllamaClient, COMMAND_EXAMPLES};

use crate::config::Config;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    let tables = load_tables(&config.data_dir)
        .with_context(|| format!("loading dataset from {}", config.data_dir.display()))?;
    let client = OllamaClient::new(&config.ollama_host, config.timeout_secs)
        .context("creating model client")?;
    let agent = Agent::new(&tables, &client, &config.model);

    if let Some(line) = &config.command {
        println!("{}", answer(&agent, line));
        return Ok(());
    }

    check_model(&client, &config.model);
    print_banner(&config.model);
    run_loop(&agent)
}

fn run_loop<C: LlmClient + ?Sized>(agent: &Agent<'_, C>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("You: ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_exit(input) {
            break;
        }

        println!("\nAgent: {}\n", answer(agent, input));
    }

    println!("Bye!");
    Ok(())
}

fn answer<C: LlmClient + ?Sized>(agent: &Agent<'_, C>, input: &str) -> String {
    match agent.respond(input) {
        Ok(reply) => reply.text,
        Err(e) => {
            tracing::warn!(error = %e, "model fallback failed");
            format!("[error] {}", e)
        }
    }
}

fn is_exit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "exit" | "quit")
}

/// Warn, never fail, when the model is not installed or the server is down.
fn check_model(client: &OllamaClient, model: &str) {
    match client.is_model_available(model) {
        Ok(true) => {}
        Ok(false) => tracing::warn!(model, "model not installed; try `ollama pull {}`", model),
        Err(e) => tracing::warn!(error = %e, "model server not reachable; free-form questions will fail"),
    }
}

fn print_banner(model: &str) {
    println!("Healthcare Demo Agent (local model: {}) running.", model);
    println!("Synthetic data only. Not medical advice.");
    println!("Commands:");
    for example in COMMAND_EXAMPLES {
        println!("- {}", example);
    }
    println!("Type 'exit' to quit.\n");
}
