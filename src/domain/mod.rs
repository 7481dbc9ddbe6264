// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so that the timing rules
//! can be tested without a runtime.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`JournalCapacity`](diagnostics::JournalCapacity))
//! - [`notification`]: Notification identity and value objects
//!   ([`NotificationId`](notification::NotificationId), [`Category`](notification::Category),
//!   [`Lifetime`](notification::Lifetime), [`AnimationDelay`](notification::AnimationDelay))

pub mod diagnostics;
pub mod notification;
