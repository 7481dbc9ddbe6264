// SPDX-License-Identifier: MPL-2.0
//! Notification timing newtypes.
//!
//! This module provides type-safe wrappers for notification timings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Lifetime Bounds
// =============================================================================

/// Notification lifetime bounds (100 ms to 10 minutes).
pub mod lifetime_bounds {
    /// Minimum lifetime in milliseconds.
    pub const MIN_MS: u64 = 100;
    /// Maximum lifetime in milliseconds.
    pub const MAX_MS: u64 = 600_000;
    /// Default lifetime in milliseconds.
    pub const DEFAULT_MS: u64 = 3_000;
}

// =============================================================================
// Lifetime
// =============================================================================

/// Total countdown of a notification before it starts leaving.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (100 ms – 10 min).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Lifetime(u64);

impl Lifetime {
    /// Creates a new lifetime in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(lifetime_bounds::MIN_MS, lifetime_bounds::MAX_MS))
    }

    /// Creates a new lifetime from a duration, clamping to valid range.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    /// Returns the lifetime in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the lifetime as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self(lifetime_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Animation Delay Bounds
// =============================================================================

/// Animation delay bounds (0 to 5 seconds).
pub mod delay_bounds {
    /// Minimum delay in milliseconds.
    pub const MIN_MS: u64 = 0;
    /// Maximum delay in milliseconds.
    pub const MAX_MS: u64 = 5_000;
}

// =============================================================================
// AnimationDelay
// =============================================================================

/// Wait inserted around entry and exit transitions.
///
/// Used both for the entry-settle window before a notification becomes
/// visible and for the exit grace before it is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationDelay(u64);

impl AnimationDelay {
    /// Creates a new delay in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(delay_bounds::MIN_MS, delay_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
