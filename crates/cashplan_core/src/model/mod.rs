mod accounts;
mod duration;
mod items;
mod year;

pub use accounts::{Account, INVESTMENTS_ACCOUNT};
pub use duration::Duration;
pub use items::{BudgetItem, INFLATION_RATE};
pub use year::{Year, YearSnapshot};
