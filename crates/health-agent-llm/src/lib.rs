//! Language-model fallback for the healthcare demo agent.
//!
//! Input the router cannot classify goes to a locally hosted model (Ollama)
//! with a fixed system prompt that keeps it to the synthetic dataset and away
//! from medical advice.

pub mod client;
pub mod prompts;

pub use client::*;
pub use prompts::*;
