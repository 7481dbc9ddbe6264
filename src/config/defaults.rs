// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Notification lifetime and animation windows
//! - **Diagnostics**: Lifecycle journal capacity

use crate::domain::diagnostics::journal_capacity_bounds;
use crate::domain::notification::{delay_bounds, lifetime_bounds};

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default countdown before a notification leaves (in milliseconds).
pub const DEFAULT_LIFETIME_MS: u64 = lifetime_bounds::DEFAULT_MS;

/// Minimum allowed lifetime (in milliseconds).
pub const MIN_LIFETIME_MS: u64 = lifetime_bounds::MIN_MS;

/// Default wait before a new notification is marked visible, giving the
/// display layer one frame to mount it before the entry transition.
pub const DEFAULT_ENTRY_DELAY_MS: u64 = 50;

/// Default wait between hiding a notification and deleting it, matching
/// the exit transition length.
pub const DEFAULT_EXIT_GRACE_MS: u64 = 400;

/// Maximum allowed entry delay or exit grace (in milliseconds).
pub const MAX_ANIMATION_DELAY_MS: u64 = delay_bounds::MAX_MS;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in the journal.
pub const DEFAULT_JOURNAL_CAPACITY: usize = journal_capacity_bounds::DEFAULT;

/// Minimum journal capacity.
pub const MIN_JOURNAL_CAPACITY: usize = journal_capacity_bounds::MIN;
