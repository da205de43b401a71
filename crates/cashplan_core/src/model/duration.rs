//! Item lifetimes
//!
//! A budget item either has a finite number of contributing years left, lives
//! forever, or has already expired. Expired is terminal: an expired item stays
//! expired and contributes nothing.

use std::fmt;

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::InvalidDuration;

/// Remaining lifetime of a budget item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Duration {
    /// Contributes for this many more years (always >= 1)
    Remaining(u32),
    /// Never expires
    Infinite,
    /// Terminal, zero-valued
    Expired,
}

impl Duration {
    /// Checked constructor for finite durations.
    pub fn remaining(years: i64) -> Result<Self, InvalidDuration> {
        if years >= 1 && years <= i64::from(u32::MAX) {
            Ok(Duration::Remaining(years as u32))
        } else {
            Err(InvalidDuration(years))
        }
    }

    /// The duration after one more year has passed.
    ///
    /// `Remaining(1)` runs out and becomes `Expired`; `Infinite` and
    /// `Expired` are fixed points.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Duration::Remaining(1) => Duration::Expired,
            Duration::Remaining(n) => Duration::Remaining(n - 1),
            Duration::Infinite => Duration::Infinite,
            Duration::Expired => Duration::Expired,
        }
    }

    #[must_use]
    pub fn is_expired(self) -> bool {
        self == Duration::Expired
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duration::Remaining(n) => write!(f, "{n}"),
            Duration::Infinite => write!(f, "infinite"),
            Duration::Expired => write!(f, "expired"),
        }
    }
}

// Wire form is `"infinite" | "expired" | <positive integer>`, shared by seed
// documents and exports.

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Duration::Remaining(n) => serializer.serialize_u32(*n),
            Duration::Infinite => serializer.serialize_str("infinite"),
            Duration::Expired => serializer.serialize_str("expired"),
        }
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Years(i64),
            Tag(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Years(n) => Duration::remaining(n).map_err(D::Error::custom),
            Repr::Tag(tag) => match tag.as_str() {
                "infinite" => Ok(Duration::Infinite),
                "expired" => Ok(Duration::Expired),
                other => Err(D::Error::unknown_variant(other, &["infinite", "expired"])),
            },
        }
    }
}
