// SPDX-License-Identifier: MPL-2.0
//! Core notification data structure.
//!
//! This is the record published to the display layer. Timing state lives
//! in the registry and is not part of it.

use crate::domain::notification::{Category, NotificationId};
use std::time::Duration;

/// A notification as seen by the display layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Display text, shown as given.
    message: String,
    /// Descriptive category (styling only).
    category: Category,
    /// Drives entry and exit transitions.
    visible: bool,
    /// Total countdown before the notification leaves.
    planned_duration: Duration,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        message: String,
        category: Category,
        planned_duration: Duration,
    ) -> Self {
        Self {
            id,
            message,
            category,
            visible: false,
            planned_duration,
        }
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns whether the display layer should show the notification.
    ///
    /// `false` both before the entry transition and during the exit one.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the total lifetime.
    #[must_use]
    pub fn planned_duration(&self) -> Duration {
        self.planned_duration
    }

    /// Returns the total lifetime in milliseconds.
    #[must_use]
    pub fn planned_duration_ms(&self) -> u64 {
        u64::try_from(self.planned_duration.as_millis()).unwrap_or(u64::MAX)
    }
}
