//! One year of a plan
//!
//! A `Year` is a pure aggregate of the items and accounts active in one
//! calendar year. It owns its contents exclusively; every transformation
//! builds fresh values, so no two years ever share state.

use serde::Serialize;

use super::accounts::Account;
use super::items::BudgetItem;

/// The items and accounts active in a single year
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Year {
    pub items: Vec<BudgetItem>,
    pub accounts: Vec<Account>,
}

impl Year {
    pub fn new(items: Vec<BudgetItem>, accounts: Vec<Account>) -> Self {
        Self { items, accounts }
    }

    /// A year holding only cash-flow items.
    pub fn with_items(items: Vec<BudgetItem>) -> Self {
        Self::new(items, Vec::new())
    }

    /// Net cash flow for this year: income minus expenses, summed over all
    /// items. Expired items are zero-valued and drop out naturally.
    pub fn extra_cash(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Project this year forward by one year.
    ///
    /// Every item and account compounds independently. The `investments`
    /// account additionally receives this year's pre-growth [`extra_cash`]
    /// as a deposit, applied after its own growth.
    ///
    /// [`extra_cash`]: Year::extra_cash
    #[must_use]
    pub fn next_year(&self) -> Self {
        let extra = self.extra_cash();

        let items = self.items.iter().map(BudgetItem::annual_increase).collect();
        let accounts = self
            .accounts
            .iter()
            .map(|account| {
                let grown = account.annual_increase();
                if account.is_investments() {
                    grown.add(extra)
                } else {
                    grown
                }
            })
            .collect();

        Self::new(items, accounts)
    }

    /// Combine this year with an independently seeded year at the same index.
    ///
    /// Concatenation only: both operands' items and accounts survive in
    /// order, with no deduplication of colliding names. Merging with an
    /// absent year is the identity.
    #[must_use]
    pub fn merge(&self, other: Option<&Year>) -> Self {
        match other {
            None => self.clone(),
            Some(other) => {
                let mut items = self.items.clone();
                items.extend(other.items.iter().cloned());
                let mut accounts = self.accounts.clone();
                accounts.extend(other.accounts.iter().cloned());
                Self::new(items, accounts)
            }
        }
    }

    /// Export projection of this year, handed to external report writers.
    pub fn snapshot(&self) -> YearSnapshot {
        YearSnapshot {
            items: self.items.clone(),
        }
    }
}

/// Point-in-time export shape of a [`Year`].
///
/// Carries items only; account balances are not part of the exported shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSnapshot {
    pub items: Vec<BudgetItem>,
}
