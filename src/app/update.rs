// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for the two
//! screens. The handlers translate component events into mutations of the
//! image collection, toast notifications, and async capture tasks.

use super::{Message, Screen};
use crate::collection::ImageCollection;
use crate::gateway::{self, PickerConfig, SharedGateway, Source};
use crate::i18n::fluent::I18n;
use crate::ui::capture::{self, Event as CaptureEvent};
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub collection: &'a mut ImageCollection,
    pub capture: &'a mut capture::State,
    pub gallery: &'a mut gallery::State,
    pub notifications: &'a mut notifications::Manager,
    pub gateway: &'a SharedGateway,
    pub window_size: &'a iced::Size,
}

/// Handles messages from the capture screen.
pub fn handle_capture_message(
    ctx: &mut UpdateContext<'_>,
    message: capture::Message,
) -> Task<Message> {
    match ctx.capture.update(message) {
        CaptureEvent::None => Task::none(),
        CaptureEvent::CaptureRequested(source) => {
            let gateway = ctx.gateway.clone();
            Task::perform(
                gateway::resolve(gateway, source, PickerConfig::default()),
                move |resolution| Message::Capture(capture::Message::Resolved { source, resolution }),
            )
        }
        CaptureEvent::Captured { source, image } => {
            log::info!("appending {image} from {source:?}");
            ctx.collection.append(image);
            let key = match source {
                Source::Library => "notification-library-added",
                Source::Camera => "notification-camera-added",
            };
            ctx.notifications.push(Notification::success(key));
            Task::none()
        }
        CaptureEvent::PermissionDenied(source) => {
            let key = match source {
                Source::Library => "notification-permission-library",
                Source::Camera => "notification-permission-camera",
            };
            ctx.notifications.push(Notification::warning(key));
            Task::none()
        }
        CaptureEvent::Failed(err) => {
            ctx.notifications
                .push(Notification::error(err.i18n_key()).with_arg("reason", err.message()));
            Task::none()
        }
        CaptureEvent::OpenGallery => handle_screen_switch(ctx, Screen::Gallery),
    }
}

/// Handles messages from the gallery screen.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.update(message) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::Delete(index) => {
            // The prompt index may be stale by the time the user confirms;
            // a vanished index is a no-op, not a failure.
            match ctx.collection.delete_at(index) {
                Ok(removed) => log::info!("deleted {removed} at index {index}"),
                Err(err) => log::debug!("ignoring stale delete: {err}"),
            }
            Task::none()
        }
        GalleryEvent::Back => handle_screen_switch(ctx, Screen::Capture),
    }
}

/// Handles messages from the navbar.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::Back => handle_screen_switch(ctx, Screen::Capture),
    }
}

/// Switches the visible screen and fires the focus hook of the screen
/// gaining visibility.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }

    *ctx.screen = target;
    match target {
        Screen::Gallery => {
            // Cell size is frozen per visit from the last known width.
            ctx.gallery.mount(ctx.window_size.width);
            ctx.gallery.on_focus(ctx.collection);
        }
        Screen::Capture => ctx.capture.on_focus(),
    }

    Task::none()
}
