// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! Identity and descriptive values shared by the registry and its consumers.

mod newtypes;

pub use newtypes::{delay_bounds, lifetime_bounds, AnimationDelay, Lifetime};

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a notification.
///
/// Identifiers come from a single process-wide counter: they increase
/// strictly with every allocation and are never handed out twice, even
/// when several registries coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Allocates the next identifier.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptive category of a notification.
///
/// Categories only influence presentation; the registry treats every
/// category the same way. Names outside the four known ones are kept
/// verbatim in [`Category::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Neutral information.
    #[default]
    Info,
    /// An operation completed successfully.
    Success,
    /// Something needs attention but nothing failed.
    Warning,
    /// An operation failed.
    Error,
    /// Any other category name, stored as given.
    Other(String),
}

impl Category {
    /// Returns the category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::Info => "info",
            Category::Success => "success",
            Category::Warning => "warning",
            Category::Error => "error",
            Category::Other(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "info" => Category::Info,
            "success" => Category::Success,
            "warning" => Category::Warning,
            "error" => Category::Error,
            other => Category::Other(other.to_string()),
        })
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}
