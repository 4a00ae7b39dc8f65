// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Capture feedback (image added, permission refused, camera failure) is
//! surfaced through short-lived toasts rather than blocking dialogs, so the
//! capture screen stays interactive while a notice is up.
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget for rendering notifications

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
