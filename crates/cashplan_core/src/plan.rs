//! The projection driver
//!
//! A `Plan` is a sparse timeline of [`Year`]s keyed by year index, plus the
//! position the plan has been computed up to. [`Plan::run_years`] advances
//! the timeline to a target year, merging each computed year with any year
//! the caller pre-seeded at the same index.

use rustc_hash::FxHashMap;

use crate::error::{PlanError, Result};
use crate::model::{Year, YearSnapshot};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Hard cap on projection targets. The driver loop is bounded only by the
/// target year, so arbitrary inputs must not be able to run it unbounded.
pub const MAX_PROJECTION_YEARS: u32 = 500;

/// A sparse timeline of years and the position it has been computed up to
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    years: FxHashMap<u32, Year>,
    current_year: u32,
}

impl Plan {
    /// A plan positioned at year 0.
    ///
    /// The seed normally holds year 0; it may also pre-seed future indices
    /// with years whose items should only start then.
    pub fn new(years: impl IntoIterator<Item = (u32, Year)>) -> Self {
        Self::with_current_year(years, 0)
    }

    pub fn with_current_year(
        years: impl IntoIterator<Item = (u32, Year)>,
        current_year: u32,
    ) -> Self {
        Self {
            years: years.into_iter().collect(),
            current_year,
        }
    }

    pub fn current_year(&self) -> u32 {
        self.current_year
    }

    pub fn year(&self, index: u32) -> Option<&Year> {
        self.years.get(&index)
    }

    /// All years, sorted ascending by index.
    ///
    /// The backing map is sparse and unordered; consumers always iterate
    /// this sorted view.
    pub fn years(&self) -> Vec<(u32, &Year)> {
        let mut years: Vec<_> = self.years.iter().map(|(k, v)| (*k, v)).collect();
        years.sort_unstable_by_key(|(index, _)| *index);
        years
    }

    /// Advance the timeline to `target_year`, returning the extended plan.
    ///
    /// Each step asks the current year for its successor, then merges that
    /// successor with any pre-seeded year at the new index. A target at or
    /// before the current position is a no-op: the returned plan is
    /// structurally equal to `self`.
    pub fn run_years(&self, target_year: u32) -> Result<Plan> {
        if target_year > MAX_PROJECTION_YEARS {
            return Err(PlanError::HorizonTooFar {
                target: target_year,
                max: MAX_PROJECTION_YEARS,
            });
        }

        let mut years = self.years.clone();
        let mut current = self.current_year;

        while current < target_year {
            let next = years
                .get(&current)
                .ok_or(PlanError::MissingSeedYear(current))?
                .next_year();
            current += 1;
            let merged = next.merge(years.get(&current));
            years.insert(current, merged);
        }

        Ok(Plan {
            years,
            current_year: current,
        })
    }

    /// Export shaping: every year's snapshot, sorted ascending by index.
    ///
    /// This is a read-only projection over already-computed state, intended
    /// for an external writer to flatten into rows.
    pub fn export(&self) -> Vec<(u32, YearSnapshot)> {
        self.years()
            .into_iter()
            .map(|(index, year)| (index, year.snapshot()))
            .collect()
    }
}

/// Evaluate many independent plans against the same target year.
///
/// Plans share no state, so with the `parallel` feature this fans out across
/// threads; otherwise it runs serially.
#[cfg(feature = "parallel")]
pub fn run_plans(plans: &[Plan], target_year: u32) -> Vec<Result<Plan>> {
    plans
        .par_iter()
        .map(|plan| plan.run_years(target_year))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn run_plans(plans: &[Plan], target_year: u32) -> Vec<Result<Plan>> {
    plans
        .iter()
        .map(|plan| plan.run_years(target_year))
        .collect()
}
