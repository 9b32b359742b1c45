//! Domain models for the healthcare dataset.

mod encounter;
mod lab;
mod patient;

pub use encounter::*;
pub use lab::*;
pub use patient::*;
