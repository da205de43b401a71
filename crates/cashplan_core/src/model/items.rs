//! Budget items
//!
//! A `BudgetItem` is a single cash-flow line: negative amounts are expenses,
//! positive amounts are income. Items compound at their own rate each year
//! until their duration runs out.

use serde::{Deserialize, Serialize};

use super::duration::Duration;

/// Default compounding rate for recurring items.
pub const INFLATION_RATE: f64 = 0.03;

/// A single expense or income line within a year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub name: String,
    pub amount: f64,
    pub rate_of_increase: f64,
    pub duration: Duration,
}

impl BudgetItem {
    /// A recurring item growing at [`INFLATION_RATE`] forever.
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self::with_terms(name, amount, INFLATION_RATE, Duration::Infinite)
    }

    /// An item with explicit rate and duration.
    pub fn with_terms(
        name: impl Into<String>,
        amount: f64,
        rate_of_increase: f64,
        duration: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            rate_of_increase,
            duration,
        }
    }

    pub fn recurring_expense(name: impl Into<String>, amount: f64) -> Self {
        Self::new(name, -amount)
    }

    pub fn one_time_expense(name: impl Into<String>, amount: f64) -> Self {
        Self::with_terms(name, -amount, 0.0, Duration::Remaining(1))
    }

    pub fn recurring_income(name: impl Into<String>, amount: f64) -> Self {
        Self::new(name, amount)
    }

    pub fn one_time_income(name: impl Into<String>, amount: f64) -> Self {
        Self::with_terms(name, amount, 0.0, Duration::Remaining(1))
    }

    /// The item one year later.
    ///
    /// An item in its final year (or one already expired) collapses to a
    /// terminal zero-impact item; everything else compounds at its rate.
    #[must_use]
    pub fn annual_increase(&self) -> Self {
        match self.duration.next() {
            Duration::Expired => Self::with_terms(self.name.clone(), 0.0, 0.0, Duration::Expired),
            next => Self::with_terms(
                self.name.clone(),
                self.amount + self.amount * self.rate_of_increase,
                self.rate_of_increase,
                next,
            ),
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.duration.is_expired()
    }
}
