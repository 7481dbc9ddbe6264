// SPDX-License-Identifier: MPL-2.0
//! Size of the lifecycle journal.

/// Bounds on how many lifecycle events the journal keeps.
pub mod journal_capacity_bounds {
    pub const MIN: usize = 16;
    pub const MAX: usize = 10_000;
    pub const DEFAULT: usize = 256;
}

/// Number of events the registry journal holds before evicting.
///
/// Always within `16..=10_000`; out-of-range requests are clamped, so a
/// zero from a hand-edited config still yields a usable journal.
///
/// ```
/// use toast_registry::domain::diagnostics::JournalCapacity;
///
/// assert_eq!(JournalCapacity::new(512).value(), 512);
/// assert_eq!(JournalCapacity::new(0).value(), 16);
/// assert_eq!(JournalCapacity::default().value(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalCapacity(usize);

impl JournalCapacity {
    #[must_use]
    pub fn new(events: usize) -> Self {
        Self(events.clamp(journal_capacity_bounds::MIN, journal_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for JournalCapacity {
    fn default() -> Self {
        Self(journal_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_requests_are_clamped() {
        assert_eq!(JournalCapacity::new(0).value(), journal_capacity_bounds::MIN);
        assert_eq!(
            JournalCapacity::new(usize::MAX).value(),
            journal_capacity_bounds::MAX
        );
        assert_eq!(JournalCapacity::new(300).value(), 300);
    }

    #[test]
    fn default_sits_inside_bounds() {
        let default = JournalCapacity::default().value();
        assert_eq!(default, journal_capacity_bounds::DEFAULT);
        assert_eq!(JournalCapacity::new(default), JournalCapacity::default());
    }
}
