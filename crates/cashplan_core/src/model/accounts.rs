//! Savings and investment accounts
//!
//! Accounts hold a balance that compounds annually. Unlike budget items they
//! never expire. The account named [`INVESTMENTS_ACCOUNT`] is special-cased by
//! the year projection: it receives the prior year's leftover cash on top of
//! its own growth.

use serde::{Deserialize, Serialize};

/// Reserved account name that absorbs each year's net surplus.
pub const INVESTMENTS_ACCOUNT: &str = "investments";

/// A balance that compounds annually
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub amount: f64,
    pub rate_of_increase: f64,
}

impl Account {
    pub fn new(name: impl Into<String>, amount: f64, rate_of_increase: f64) -> Self {
        Self {
            name: name.into(),
            amount,
            rate_of_increase,
        }
    }

    /// The account one year later, grown at its rate.
    #[must_use]
    pub fn annual_increase(&self) -> Self {
        Self::new(
            self.name.clone(),
            self.amount * (1.0 + self.rate_of_increase),
            self.rate_of_increase,
        )
    }

    /// The account with `delta` deposited (or withdrawn, when negative).
    #[must_use]
    pub fn add(&self, delta: f64) -> Self {
        Self::new(self.name.clone(), self.amount + delta, self.rate_of_increase)
    }

    #[must_use]
    pub fn is_investments(&self) -> bool {
        self.name == INVESTMENTS_ACCOUNT
    }
}
