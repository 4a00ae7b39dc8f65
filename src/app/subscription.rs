// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tick cadence for notification auto-dismiss checks.
const NOTIFICATION_TICK: Duration = Duration::from_millis(300);

/// Builds the application's batched subscription.
///
/// Window resizes are always tracked (the gallery freezes its cell size
/// from the last known width at mount). The tick only runs while there is
/// something to auto-dismiss, so an idle app schedules nothing.
pub fn create(has_notifications: bool) -> Subscription<Message> {
    let resize_sub = event::listen_with(|event, _status, _window| match event {
        iced::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    });

    let tick_sub = if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([resize_sub, tick_sub])
}
