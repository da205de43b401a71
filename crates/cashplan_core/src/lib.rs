//! Financial plan projection library
//!
//! This crate projects a personal financial plan forward in time. A plan is a
//! sparse timeline of years; each year holds the cash-flow items (expenses and
//! income) and savings accounts active in it. Projection compounds every item
//! and account annually and deposits each year's leftover cash into the
//! reserved `investments` account.
//!
//! Every transformation is pure: items, accounts, years, and plans are
//! consumed and returned as new values, so independent plans can be evaluated
//! concurrently (see [`plan::run_plans`]).
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic plan setup:
//!
//! ```ignore
//! use cashplan_core::config::PlanBuilder;
//! use cashplan_core::model::{Account, BudgetItem};
//!
//! let plan = PlanBuilder::new()
//!     .item(BudgetItem::recurring_income("salary", 60_000.0))
//!     .item(BudgetItem::recurring_expense("rent", 24_000.0))
//!     .account(Account::new("investments", 10_000.0, 0.07))
//!     .item_at(3, BudgetItem::one_time_expense("new car", 30_000.0))
//!     .build();
//!
//! let projected = plan.run_years(30)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod plan;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{InvalidDuration, PlanError};
pub use model::{
    Account, BudgetItem, Duration, INFLATION_RATE, INVESTMENTS_ACCOUNT, Year, YearSnapshot,
};
pub use plan::{MAX_PROJECTION_YEARS, Plan, run_plans};
