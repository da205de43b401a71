//! Plan builder
//!
//! Fluent API for assembling a seed plan in code. Items and accounts land in
//! the starting year unless addressed to a future index with the `_at`
//! variants, which pre-seed that year for a later merge.
//!
//! # Example
//!
//! ```ignore
//! use cashplan_core::config::PlanBuilder;
//! use cashplan_core::model::{Account, BudgetItem};
//!
//! let plan = PlanBuilder::new()
//!     .item(BudgetItem::recurring_income("salary", 60_000.0))
//!     .item(BudgetItem::recurring_expense("living", 40_000.0))
//!     .account(Account::new("investments", 25_000.0, 0.07))
//!     .account(Account::new("college fund", 5_000.0, 0.04))
//!     .item_at(5, BudgetItem::one_time_expense("wedding", 20_000.0))
//!     .build();
//! ```

use rustc_hash::FxHashMap;

use crate::model::{Account, BudgetItem, Year};
use crate::plan::Plan;

/// Builder for seed plans
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    years: FxHashMap<u32, Year>,
    starting_year: u32,
}

impl PlanBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index the plan starts at. Defaults to 0.
    #[must_use]
    pub fn starting_at(mut self, year: u32) -> Self {
        self.starting_year = year;
        self
    }

    /// Add an item to the starting year.
    #[must_use]
    pub fn item(self, item: BudgetItem) -> Self {
        let year = self.starting_year;
        self.item_at(year, item)
    }

    /// Pre-seed an item into the given year.
    #[must_use]
    pub fn item_at(mut self, year: u32, item: BudgetItem) -> Self {
        self.years.entry(year).or_default().items.push(item);
        self
    }

    /// Add an account to the starting year.
    #[must_use]
    pub fn account(self, account: Account) -> Self {
        let year = self.starting_year;
        self.account_at(year, account)
    }

    /// Pre-seed an account into the given year.
    #[must_use]
    pub fn account_at(mut self, year: u32, account: Account) -> Self {
        self.years.entry(year).or_default().accounts.push(account);
        self
    }

    /// Build the seed plan. An empty builder still seeds its starting year,
    /// so the resulting plan is always runnable.
    #[must_use]
    pub fn build(mut self) -> Plan {
        self.years.entry(self.starting_year).or_default();
        Plan::with_current_year(self.years, self.starting_year)
    }
}
