// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the notification lifecycle.
//!
//! The registry records every transition (creation, reveal, pause, resume,
//! expiry, dismissal, deletion, bulk clear) in a memory-bounded journal so that the order of deferred callbacks
//! can be inspected after the fact.
//!
//! # Architecture
//!
//! - [`Journal`]: Bounded ring of recent transitions
//! - [`LifecycleEvent`]: One timestamped transition of one notification
//! - [`JournalCapacity`]: Validated journal size

mod events;
mod journal;

pub use crate::domain::diagnostics::JournalCapacity;
pub use events::{LifecycleEvent, LifecycleEventKind};
pub use journal::Journal;
