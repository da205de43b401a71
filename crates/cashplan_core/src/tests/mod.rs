//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `items` - Budget item factories, compounding, and expiry
//! - `accounts` - Account growth and deposits
//! - `years` - Per-year aggregation, projection, and merging
//! - `plans` - The timeline driver and export shaping
//! - `config` - Seed documents and the plan builder

mod config;
