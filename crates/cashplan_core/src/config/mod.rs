//! Seed plan configuration
//!
//! A plan is authored outside the engine and injected as a seed: a mapping
//! from year index to the items and accounts that start in that year. This
//! module holds the serde document types for file-based seeds and a fluent
//! [`PlanBuilder`] for programmatic ones.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "current_year": 0,
//!   "years": {
//!     "0": {
//!       "items": [
//!         { "kind": "recurring_income", "name": "salary", "amount": 60000.0 },
//!         { "kind": "recurring_expense", "name": "rent", "amount": 24000.0 }
//!       ],
//!       "accounts": [
//!         { "name": "investments", "amount": 10000.0, "rate_of_increase": 0.07 }
//!       ]
//!     },
//!     "3": {
//!       "items": [
//!         { "kind": "one_time_expense", "name": "new car", "amount": 30000.0 }
//!       ]
//!     }
//!   }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Account, BudgetItem, Duration, Year};
use crate::plan::Plan;

pub mod builder;

pub use builder::PlanBuilder;

/// Seed document for a whole plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Index the plan starts at (almost always 0)
    #[serde(default)]
    pub current_year: u32,

    /// Sparse mapping from year index to that year's contents
    #[serde(default)]
    pub years: HashMap<u32, YearConfig>,
}

impl PlanConfig {
    pub fn into_plan(self) -> Plan {
        let years = self
            .years
            .into_iter()
            .map(|(index, year)| (index, year.into_year()));
        Plan::with_current_year(years, self.current_year)
    }
}

/// Seed document for a single year
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearConfig {
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl YearConfig {
    pub fn into_year(self) -> Year {
        Year::new(
            self.items.into_iter().map(ItemConfig::into_item).collect(),
            self.accounts,
        )
    }
}

/// Which factory a seed item maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    RecurringExpense,
    OneTimeExpense,
    RecurringIncome,
    OneTimeIncome,
}

/// Seed document for a single budget item
///
/// The `kind` selects the factory defaults; `rate_of_increase` and `duration`
/// may override them for items that don't fit the four stock shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub kind: ItemKind,
    pub name: String,
    /// Magnitude of the cash flow; expenses are negated by their factory
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_of_increase: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
}

impl ItemConfig {
    pub fn into_item(self) -> BudgetItem {
        let mut item = match self.kind {
            ItemKind::RecurringExpense => BudgetItem::recurring_expense(self.name, self.amount),
            ItemKind::OneTimeExpense => BudgetItem::one_time_expense(self.name, self.amount),
            ItemKind::RecurringIncome => BudgetItem::recurring_income(self.name, self.amount),
            ItemKind::OneTimeIncome => BudgetItem::one_time_income(self.name, self.amount),
        };
        if let Some(rate) = self.rate_of_increase {
            item.rate_of_increase = rate;
        }
        if let Some(duration) = self.duration {
            item.duration = duration;
        }
        item
    }
}
