// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle.
//!
//! Notifications appear temporarily to inform users about actions (save
//! success, errors, etc.) without blocking interaction. This module keeps
//! their state; rendering belongs to whoever subscribes to it.
//!
//! # Components
//!
//! - [`notification`] - The `Notification` record published to the display layer
//! - [`registry`] - `Registry` driving creation, countdowns and removal
//! - `countdown` - Pause/resume arithmetic behind each countdown
//!
//! # Usage
//!
//! ```ignore
//! use toast_registry::notifications::{Message, Registry};
//!
//! let registry = Registry::new(&config)?;
//! let id = registry.success("Image saved");
//!
//! // Display layer: hover freezes the countdown, leaving restarts it
//! registry.handle_message(&Message::PointerEntered(id));
//! registry.handle_message(&Message::PointerLeft(id));
//!
//! // Render from snapshots
//! let mut snapshots = registry.subscribe();
//! while snapshots.changed().await.is_ok() {
//!     render(&snapshots.borrow_and_update());
//! }
//! ```
//!
//! # Timing
//!
//! - Lifetime: 3s by default, overridable per notification
//! - Entry delay: 50ms before `visible` turns on
//! - Exit grace: 400ms between `visible` turning off and deletion

mod countdown;
pub mod notification;
pub mod registry;

pub use crate::domain::notification::{Category, NotificationId};
pub use notification::Notification;
pub use registry::{Message, Registry};
