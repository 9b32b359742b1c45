//! Health-Agent Core Library
//!
//! A small chat assistant over a synthetic healthcare dataset.
//!
//! # Architecture
//!
//! ```text
//! patients.csv  encounters.csv  labs.csv
//!        └──────────┬──────────┘
//!                   ▼
//!            Dataset Loader  ──►  Tables (read-only)
//!                                     │
//! user text ──► Router ──► Tool? ─────┤
//!                 │                   ▼
//!                 │ no match     Dispatcher ──► query text
//!                 ▼
//!          LLM fallback (Ollama) ──► model text
//! ```
//!
//! # Core Principle
//!
//! **Identifiers only come from the router's patterns.** The model never
//! chooses which query runs or with which patient id.
//!
//! # Modules
//!
//! - [`data`]: CSV loading into typed tables
//! - [`models`]: Row types (Patient, Encounter, Lab)
//! - [`router`]: Ordered regular-expression rules
//! - [`tools`]: The six queries and the dispatcher
//! - [`agent`]: Router + dispatcher + model fallback

pub mod agent;
pub mod data;
pub mod models;
pub mod router;
pub mod tools;

// Re-export commonly used types
pub use agent::{Agent, Reply, ReplySource};
pub use data::{load_tables, DataError, DataResult, TableKind, Tables};
pub use models::{Encounter, Lab, Patient};
pub use router::Router;
pub use tools::{run_named, run_tool, Tool, ToolError};
