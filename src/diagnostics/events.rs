// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types recorded by the registry journal.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::notification::NotificationId;

/// One transition in a notification's life.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleEvent {
    /// Notification the event belongs to.
    pub id: NotificationId,
    /// What happened.
    pub kind: LifecycleEventKind,
    /// Wall-clock time of the transition.
    pub at: DateTime<Utc>,
}

impl LifecycleEvent {
    /// Creates a new event stamped with the current time.
    #[must_use]
    pub fn new(id: NotificationId, kind: LifecycleEventKind) -> Self {
        Self {
            id,
            kind,
            at: Utc::now(),
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} {}",
            self.at.format("%H:%M:%S%.3f"),
            self.id,
            self.kind
        )
    }
}

/// The kind of a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEventKind {
    /// Inserted into the registry.
    Created {
        /// Category name as stored.
        category: String,
        /// Planned lifetime in milliseconds.
        lifetime_ms: u64,
    },
    /// Entry delay elapsed; marked visible.
    Revealed,
    /// Countdown frozen.
    Paused {
        /// Time left when frozen, in milliseconds.
        remaining_ms: u64,
    },
    /// Countdown restarted.
    Resumed {
        /// Time left when restarted, in milliseconds.
        remaining_ms: u64,
    },
    /// Countdown reached zero; exit started.
    Expired,
    /// Explicit removal; exit started.
    Dismissed,
    /// Exit grace elapsed; record deleted.
    Deleted,
    /// Dropped by a bulk clear, without exit grace.
    Cleared,
}

impl fmt::Display for LifecycleEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleEventKind::Created {
                category,
                lifetime_ms,
            } => write!(f, "created ({category}, {lifetime_ms} ms)"),
            LifecycleEventKind::Revealed => f.write_str("revealed"),
            LifecycleEventKind::Paused { remaining_ms } => {
                write!(f, "paused ({remaining_ms} ms left)")
            }
            LifecycleEventKind::Resumed { remaining_ms } => {
                write!(f, "resumed ({remaining_ms} ms left)")
            }
            LifecycleEventKind::Expired => f.write_str("expired"),
            LifecycleEventKind::Dismissed => f.write_str("dismissed"),
            LifecycleEventKind::Deleted => f.write_str("deleted"),
            LifecycleEventKind::Cleared => f.write_str("cleared"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_includes_timing() {
        let kind = LifecycleEventKind::Paused { remaining_ms: 1250 };
        assert_eq!(kind.to_string(), "paused (1250 ms left)");
    }

    #[test]
    fn event_display_mentions_id_and_kind() {
        let id = NotificationId::next();
        let event = LifecycleEvent::new(id, LifecycleEventKind::Expired);
        let rendered = event.to_string();
        assert!(rendered.contains(&format!("#{id}")));
        assert!(rendered.ends_with("expired"));
    }
}
