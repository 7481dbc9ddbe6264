// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`Registry`] owns the ordered list of active notifications and drives
//! each one's countdown-to-removal. Every deferred effect (becoming visible,
//! expiring, being deleted after the exit transition) is a Tokio task whose
//! abort handle is stored in the notification's own timer state.
//!
//! Each scheduled task also carries a ticket. When it fires it only acts if
//! its ticket is still the one stored in the matching slot, so a callback
//! that was already past its sleep when it got canceled cannot act on a
//! newer schedule.

use super::countdown::Countdown;
use super::notification::Notification;
use crate::config::Config;
use crate::diagnostics::{Journal, LifecycleEvent, LifecycleEventKind};
use crate::domain::notification::{AnimationDelay, Category, Lifetime, NotificationId};
use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::{debug, info, trace};

/// Messages a display layer sends back to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Explicit dismissal (close button, swipe).
    Dismiss(NotificationId),
    /// Pointer moved over the notification; freezes its countdown.
    PointerEntered(NotificationId),
    /// Pointer left the notification; restarts its countdown.
    PointerLeft(NotificationId),
    /// Drop everything immediately.
    ClearAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Reveal,
    Expiry,
    Deletion,
}

#[derive(Debug)]
struct ScheduledTimer {
    ticket: u64,
    handle: AbortHandle,
}

/// Timer handles owned by one notification.
#[derive(Debug, Default)]
struct TimerSlots {
    reveal: Option<ScheduledTimer>,
    expiry: Option<ScheduledTimer>,
    deletion: Option<ScheduledTimer>,
}

impl TimerSlots {
    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<ScheduledTimer> {
        match kind {
            TimerKind::Reveal => &mut self.reveal,
            TimerKind::Expiry => &mut self.expiry,
            TimerKind::Deletion => &mut self.deletion,
        }
    }

    /// Stores `timer`, canceling whatever was scheduled in that slot.
    fn set(&mut self, kind: TimerKind, timer: ScheduledTimer) {
        if let Some(previous) = self.slot_mut(kind).replace(timer) {
            previous.handle.abort();
        }
    }

    fn cancel(&mut self, kind: TimerKind) {
        if let Some(timer) = self.slot_mut(kind).take() {
            timer.handle.abort();
        }
    }

    fn cancel_all(&mut self) {
        self.cancel(TimerKind::Reveal);
        self.cancel(TimerKind::Expiry);
        self.cancel(TimerKind::Deletion);
    }

    /// Clears the slot if it still holds `ticket`.
    fn claim(&mut self, kind: TimerKind, ticket: u64) -> bool {
        let slot = self.slot_mut(kind);
        if slot.as_ref().is_some_and(|timer| timer.ticket == ticket) {
            *slot = None;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    fn ticket(&self, kind: TimerKind) -> Option<u64> {
        let slot = match kind {
            TimerKind::Reveal => &self.reveal,
            TimerKind::Expiry => &self.expiry,
            TimerKind::Deletion => &self.deletion,
        };
        slot.as_ref().map(|timer| timer.ticket)
    }
}

#[derive(Debug)]
struct TimerState {
    countdown: Countdown,
    exiting: bool,
    timers: TimerSlots,
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    timer: TimerState,
}

#[derive(Debug)]
struct State {
    /// Creation order.
    entries: Vec<Entry>,
    next_ticket: u64,
    journal: Journal,
}

impl State {
    fn position(&self, id: NotificationId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.notification.id() == id)
    }

    fn entry(&self, id: NotificationId) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.notification.id() == id)
    }

    fn entry_mut(&mut self, id: NotificationId) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.notification.id() == id)
    }

    fn record(&mut self, id: NotificationId, kind: LifecycleEventKind) {
        self.journal.record(id, kind);
    }

    fn snapshot(&self) -> Vec<Notification> {
        self.entries
            .iter()
            .map(|entry| entry.notification.clone())
            .collect()
    }
}

#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    snapshots: watch::Sender<Vec<Notification>>,
    runtime: Handle,
    lifetime: Lifetime,
    entry_delay: AnimationDelay,
    exit_grace: AnimationDelay,
}

impl Drop for Shared {
    fn drop(&mut self) {
        let state = self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        for entry in &mut state.entries {
            entry.timer.timers.cancel_all();
        }
    }
}

/// Registry of active notifications.
///
/// Construct one per application and hand clones to whoever needs to post
/// or control notifications; clones share the same state. Timer tasks only
/// hold weak references, so dropping the last clone aborts every pending
/// timer.
///
/// Operations on unknown ids are no-ops: they return `false` and leave the
/// registry untouched.
///
/// # Example
///
/// ```
/// use toast_registry::config::Config;
/// use toast_registry::notifications::Registry;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> toast_registry::error::Result<()> {
/// let registry = Registry::new(&Config::default())?;
///
/// let id = registry.success("Image saved");
/// assert!(registry.pause(id));
/// assert!(!registry.pause(id));
/// assert!(registry.resume(id));
///
/// registry.clear_all();
/// assert!(registry.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    shared: Arc<Shared>,
}

impl Registry {
    /// Creates a registry bound to the current Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRuntime`](crate::error::Error::NoRuntime) when
    /// called outside a runtime context.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_runtime(config, Handle::try_current()?))
    }

    /// Creates a registry that schedules its timers on `runtime`.
    #[must_use]
    pub fn with_runtime(config: &Config, runtime: Handle) -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        let state = State {
            entries: Vec::new(),
            next_ticket: 0,
            journal: Journal::new(config.journal_capacity()),
        };

        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                snapshots,
                runtime,
                lifetime: config.lifetime(),
                entry_delay: config.entry_delay(),
                exit_grace: config.exit_grace(),
            }),
        }
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Posts a notification with the configured lifetime.
    ///
    /// `category` defaults to [`Category::Info`].
    pub fn create(&self, message: impl Into<String>, category: Option<Category>) -> NotificationId {
        self.create_with_lifetime(message, category, None)
    }

    /// Posts a notification, optionally overriding its lifetime.
    ///
    /// The override is clamped to the valid lifetime range.
    pub fn create_with_lifetime(
        &self,
        message: impl Into<String>,
        category: Option<Category>,
        lifetime: Option<Duration>,
    ) -> NotificationId {
        let lifetime = lifetime.map_or(self.shared.lifetime, Lifetime::from_duration);
        let category = category.unwrap_or_default();
        let planned = lifetime.as_duration();

        let mut state = self.lock();
        let id = NotificationId::next();
        state.record(
            id,
            LifecycleEventKind::Created {
                category: category.to_string(),
                lifetime_ms: lifetime.as_millis(),
            },
        );
        debug!(id = %id, category = %category, lifetime_ms = lifetime.as_millis(), "Created notification");

        state.entries.push(Entry {
            notification: Notification::new(id, message.into(), category, planned),
            timer: TimerState {
                countdown: Countdown::start(planned, Instant::now()),
                exiting: false,
                timers: TimerSlots::default(),
            },
        });
        self.arm(
            &mut state,
            id,
            TimerKind::Reveal,
            self.shared.entry_delay.as_duration(),
        );
        self.arm(&mut state, id, TimerKind::Expiry, planned);
        self.publish(&state);

        id
    }

    /// Posts a success notification.
    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.create(message, Some(Category::Success))
    }

    /// Posts an error notification.
    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.create(message, Some(Category::Error))
    }

    /// Posts a warning notification.
    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.create(message, Some(Category::Warning))
    }

    /// Posts an info notification.
    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.create(message, Some(Category::Info))
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Starts the exit of a notification.
    ///
    /// Cancels its pending expiry, hides it, and deletes it once the exit
    /// grace has elapsed. Calling it again during the grace restarts the
    /// grace. Returns `false` if the id is unknown.
    pub fn remove(&self, id: NotificationId) -> bool {
        let mut state = self.lock();
        let Some(index) = state.position(id) else {
            trace!(id = %id, "Remove ignored: unknown notification");
            return false;
        };
        self.begin_exit(&mut state, index, LifecycleEventKind::Dismissed);
        self.publish(&state);
        true
    }

    /// Freezes a notification's countdown.
    ///
    /// Returns `false` if the id is unknown, already paused, or leaving.
    pub fn pause(&self, id: NotificationId) -> bool {
        let now = Instant::now();
        let mut state = self.lock();
        let Some(entry) = state.entry_mut(id) else {
            trace!(id = %id, "Pause ignored: unknown notification");
            return false;
        };
        if entry.timer.exiting || !entry.timer.countdown.pause(now) {
            return false;
        }
        entry.timer.timers.cancel(TimerKind::Expiry);
        let remaining_ms = duration_ms(entry.timer.countdown.remaining());

        state.record(id, LifecycleEventKind::Paused { remaining_ms });
        debug!(id = %id, remaining_ms, "Paused notification");
        true
    }

    /// Restarts a paused countdown from its remaining time.
    ///
    /// Returns `false` if the id is unknown, not paused, or leaving.
    pub fn resume(&self, id: NotificationId) -> bool {
        let now = Instant::now();
        let mut state = self.lock();
        let Some(entry) = state.entry_mut(id) else {
            trace!(id = %id, "Resume ignored: unknown notification");
            return false;
        };
        if entry.timer.exiting {
            return false;
        }
        let Some(remaining) = entry.timer.countdown.resume(now) else {
            return false;
        };
        let remaining_ms = duration_ms(remaining);

        state.record(id, LifecycleEventKind::Resumed { remaining_ms });
        self.arm(&mut state, id, TimerKind::Expiry, remaining);
        debug!(id = %id, remaining_ms, "Resumed notification");
        true
    }

    /// Drops every notification immediately, without exit grace.
    ///
    /// All pending timers are canceled; none of them will act afterwards.
    pub fn clear_all(&self) {
        let mut state = self.lock();
        let cleared = std::mem::take(&mut state.entries);
        if cleared.is_empty() {
            return;
        }
        let count = cleared.len();
        for mut entry in cleared {
            entry.timer.timers.cancel_all();
            state.record(entry.notification.id(), LifecycleEventKind::Cleared);
        }
        self.publish(&state);
        debug!(count, "Cleared all notifications");
    }

    /// Tears the registry down at application shutdown.
    pub fn shutdown(&self) {
        self.clear_all();
        info!("Notification registry shut down");
    }

    /// Handles a message from the display layer.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id);
            }
            Message::PointerEntered(id) => {
                self.pause(*id);
            }
            Message::PointerLeft(id) => {
                self.resume(*id);
            }
            Message::ClearAll => self.clear_all(),
        }
    }

    // =========================================================================
    // Read side
    // =========================================================================

    /// Returns the current notifications in creation order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().snapshot()
    }

    /// Subscribes to snapshots.
    ///
    /// The receiver holds the latest snapshot and is notified whenever a
    /// record is added, changes visibility, or is removed.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.shared.snapshots.subscribe()
    }

    /// Returns one notification by id.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.lock()
            .entry(id)
            .map(|entry| entry.notification.clone())
    }

    /// Returns the number of notifications, including leaving ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns whether the registry holds no notification.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Returns the live remaining time of a notification.
    ///
    /// Frozen while paused and zero once the exit has started. Useful for
    /// driving a progress bar.
    #[must_use]
    pub fn remaining(&self, id: NotificationId) -> Option<Duration> {
        let now = Instant::now();
        self.lock().entry(id).map(|entry| {
            if entry.timer.exiting {
                Duration::ZERO
            } else {
                entry.timer.countdown.remaining_at(now)
            }
        })
    }

    /// Returns whether a notification's countdown is paused.
    #[must_use]
    pub fn is_paused(&self, id: NotificationId) -> Option<bool> {
        self.lock()
            .entry(id)
            .map(|entry| entry.timer.countdown.is_paused())
    }

    /// Returns the recorded lifecycle transitions, oldest first.
    #[must_use]
    pub fn journal(&self) -> Vec<LifecycleEvent> {
        self.lock().journal.iter().cloned().collect()
    }

    /// Returns the recorded transitions of one notification, oldest first.
    ///
    /// Still available after the notification was deleted, as long as the
    /// journal has not evicted its events.
    #[must_use]
    pub fn history(&self, id: NotificationId) -> Vec<LifecycleEvent> {
        self.lock().journal.for_notification(id).cloned().collect()
    }

    /// Returns how many transitions the journal has dropped to stay within
    /// its capacity. Non-zero means [`journal`](Self::journal) is truncated.
    #[must_use]
    pub fn journal_evicted(&self) -> u64 {
        self.lock().journal.evicted()
    }

    /// Returns the lifetime applied when none is given.
    #[must_use]
    pub fn default_lifetime(&self) -> Lifetime {
        self.shared.lifetime
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lock(&self) -> MutexGuard<'_, State> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &State) {
        self.shared.snapshots.send_replace(state.snapshot());
    }

    /// Hides the entry at `index`, cancels its expiry and (re)schedules
    /// its deletion.
    fn begin_exit(&self, state: &mut State, index: usize, reason: LifecycleEventKind) {
        let entry = &mut state.entries[index];
        let id = entry.notification.id();
        entry.timer.timers.cancel(TimerKind::Expiry);
        entry.timer.exiting = true;
        entry.notification.set_visible(false);

        debug!(id = %id, reason = %reason, "Notification leaving");
        state.record(id, reason);
        self.arm(
            state,
            id,
            TimerKind::Deletion,
            self.shared.exit_grace.as_duration(),
        );
    }

    /// Schedules a callback and stores its handle in the entry's slot.
    fn arm(&self, state: &mut State, id: NotificationId, kind: TimerKind, delay: Duration) {
        state.next_ticket += 1;
        let ticket = state.next_ticket;
        let timer = spawn_timer(
            &self.shared.runtime,
            Arc::downgrade(&self.shared),
            id,
            kind,
            ticket,
            delay,
        );
        match state.entry_mut(id) {
            Some(entry) => entry.timer.timers.set(kind, timer),
            None => timer.handle.abort(),
        }
    }

    fn fire(&self, id: NotificationId, kind: TimerKind, ticket: u64) {
        let mut state = self.lock();
        let Some(index) = state.position(id) else {
            return;
        };
        if !state.entries[index].timer.timers.claim(kind, ticket) {
            trace!(id = %id, ?kind, "Stale timer ignored");
            return;
        }

        match kind {
            TimerKind::Reveal => {
                let entry = &mut state.entries[index];
                if entry.timer.exiting {
                    return;
                }
                entry.notification.set_visible(true);
                state.record(id, LifecycleEventKind::Revealed);
                trace!(id = %id, "Notification revealed");
            }
            TimerKind::Expiry => {
                self.begin_exit(&mut state, index, LifecycleEventKind::Expired);
            }
            TimerKind::Deletion => {
                let mut entry = state.entries.remove(index);
                entry.timer.timers.cancel_all();
                state.record(id, LifecycleEventKind::Deleted);
                debug!(id = %id, "Notification deleted");
            }
        }
        self.publish(&state);
    }

    #[cfg(test)]
    fn armed_ticket(&self, id: NotificationId, kind: TimerKind) -> Option<u64> {
        self.lock()
            .entry(id)
            .and_then(|entry| entry.timer.timers.ticket(kind))
    }

    #[cfg(test)]
    fn is_armed(&self, id: NotificationId, kind: TimerKind) -> bool {
        self.armed_ticket(id, kind).is_some()
    }
}

fn spawn_timer(
    runtime: &Handle,
    shared: Weak<Shared>,
    id: NotificationId,
    kind: TimerKind,
    ticket: u64,
    delay: Duration,
) -> ScheduledTimer {
    let task = runtime.spawn(async move {
        tokio::time::sleep(delay).await;
        if let Some(shared) = shared.upgrade() {
            Registry { shared }.fire(id, kind, ticket);
        }
    });
    ScheduledTimer {
        ticket,
        handle: task.abort_handle(),
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
