use std::fmt;

/// A remaining-duration count outside the accepted domain.
///
/// Durations are either a positive number of years, `infinite`, or `expired`.
/// Anything else is rejected at construction rather than carried through the
/// projection as a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDuration(pub i64);

impl fmt::Display for InvalidDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duration must be a positive number of years, got {}",
            self.0
        )
    }
}

impl std::error::Error for InvalidDuration {}

/// Errors surfaced by the plan driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The plan has no seed year at its current position, so there is
    /// nothing to advance from.
    MissingSeedYear(u32),
    /// The target year exceeds the engine's horizon cap.
    HorizonTooFar { target: u32, max: u32 },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::MissingSeedYear(index) => {
                write!(f, "plan has no seed year at index {index}")
            }
            PlanError::HorizonTooFar { target, max } => {
                write!(f, "target year {target} exceeds the {max} year horizon cap")
            }
        }
    }
}

impl std::error::Error for PlanError {}

pub type Result<T> = std::result::Result<T, PlanError>;
