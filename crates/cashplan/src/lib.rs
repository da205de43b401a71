//! Command-line wrapper around `cashplan_core`
//!
//! Glue only: loads a seed plan from a JSON document, runs the projection,
//! and writes the result as CSV. All plan semantics live in the core crate.

pub mod logging;
pub mod report;
pub mod seed;

pub use logging::init_logging;
