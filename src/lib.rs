// SPDX-License-Identifier: MPL-2.0
//! `toast_registry` keeps the state of transient "toast" notifications.
//!
//! Each notification has its own pausable countdown, an entry delay before
//! it becomes visible and an exit grace before it is deleted, so a display
//! layer can animate both transitions. The registry publishes ordered
//! snapshots; it never renders anything itself.

#![doc(html_root_url = "https://docs.rs/toast_registry/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;
