// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::ui::capture;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Capture(capture::Message),
    Gallery(gallery::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// The window was resized; remembered for the next gallery mount.
    WindowResized(iced::Size),
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
