// SPDX-License-Identifier: MPL-2.0
//! Bounded history of lifecycle transitions.

use std::collections::VecDeque;

use super::events::{LifecycleEvent, LifecycleEventKind};
use crate::domain::diagnostics::JournalCapacity;
use crate::domain::notification::NotificationId;

/// Ring of the most recent [`LifecycleEvent`]s, oldest first.
///
/// Once full, every new event evicts the oldest one. The number of evicted
/// events is kept so a reader can tell the history is truncated.
///
/// # Example
///
/// ```
/// use toast_registry::diagnostics::{Journal, JournalCapacity, LifecycleEventKind};
/// use toast_registry::domain::notification::NotificationId;
///
/// let mut journal = Journal::new(JournalCapacity::default());
/// let id = NotificationId::next();
///
/// journal.record(id, LifecycleEventKind::Revealed);
/// journal.record(id, LifecycleEventKind::Expired);
///
/// let kinds: Vec<_> = journal.for_notification(id).map(|e| e.kind.clone()).collect();
/// assert_eq!(kinds, vec![LifecycleEventKind::Revealed, LifecycleEventKind::Expired]);
/// assert_eq!(journal.evicted(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Journal {
    events: VecDeque<LifecycleEvent>,
    capacity: JournalCapacity,
    evicted: u64,
}

impl Journal {
    #[must_use]
    pub fn new(capacity: JournalCapacity) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity,
            evicted: 0,
        }
    }

    /// Appends a transition stamped with the current UTC time.
    pub fn record(&mut self, id: NotificationId, kind: LifecycleEventKind) {
        if self.events.len() >= self.capacity.value() {
            self.events.pop_front();
            self.evicted += 1;
        }
        self.events.push_back(LifecycleEvent::new(id, kind));
    }

    pub fn iter(&self) -> impl Iterator<Item = &LifecycleEvent> {
        self.events.iter()
    }

    /// Transitions of a single notification, oldest first.
    pub fn for_notification(&self, id: NotificationId) -> impl Iterator<Item = &LifecycleEvent> {
        self.events.iter().filter(move |event| event.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> JournalCapacity {
        self.capacity
    }

    /// Events dropped to stay within capacity since creation.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smallest() -> JournalCapacity {
        JournalCapacity::new(0)
    }

    #[test]
    fn full_journal_evicts_oldest() {
        let mut journal = Journal::new(smallest());
        let cap = journal.capacity().value();
        let ids: Vec<_> = (0..cap + 3).map(|_| NotificationId::next()).collect();

        for id in &ids {
            journal.record(*id, LifecycleEventKind::Deleted);
        }

        assert_eq!(journal.len(), cap);
        assert_eq!(journal.evicted(), 3);
        assert_eq!(journal.iter().next().map(|e| e.id), Some(ids[3]));
        assert_eq!(journal.iter().last().map(|e| e.id), ids.last().copied());
    }

    #[test]
    fn for_notification_filters_by_id() {
        let mut journal = Journal::new(JournalCapacity::default());
        let a = NotificationId::next();
        let b = NotificationId::next();

        journal.record(a, LifecycleEventKind::Revealed);
        journal.record(b, LifecycleEventKind::Revealed);
        journal.record(a, LifecycleEventKind::Dismissed);

        assert_eq!(journal.for_notification(a).count(), 2);
        assert_eq!(journal.for_notification(b).count(), 1);
    }

    #[test]
    fn new_journal_is_empty() {
        let journal = Journal::new(JournalCapacity::new(500));
        assert_eq!(journal.capacity().value(), 500);
        assert!(journal.is_empty());
        assert_eq!(journal.evicted(), 0);
    }
}
