// SPDX-License-Identifier: MPL-2.0
//! Capture screen: entry point for adding images to the session.
//!
//! The screen is a small state machine over [`Phase`]:
//!
//! ```text
//! Idle -> OptionMenuOpen      open upload options
//! OptionMenuOpen -> Idle      explicit cancel
//! OptionMenuOpen -> AwaitingCapture
//!                             source chosen; the menu closes immediately
//!                             while the capture request runs
//! AwaitingCapture -> Idle     resolution arrives (selected, cancelled,
//!                             denied, or failed) - always terminal
//! ```
//!
//! The component itself never touches the collection or the gateway: it
//! translates messages into [`Event`]s and the application layer appends,
//! notifies, and spawns the async capture task.

mod view;

pub use view::{view, ViewContext};

use crate::collection::ImageRef;
use crate::error::CaptureError;
use crate::gateway::{Resolution, Source};

/// Where the capture flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    OptionMenuOpen,
    AwaitingCapture,
}

/// Capture screen state.
#[derive(Debug, Default)]
pub struct State {
    phase: Phase,
}

/// Messages emitted by the capture screen widgets and the async capture
/// task.
#[derive(Debug, Clone)]
pub enum Message {
    /// "Upload Image" pressed.
    OpenMenu,
    /// Options modal dismissed without choosing.
    CloseMenu,
    /// One of the modal rows picked.
    SourceSelected(Source),
    /// "View Gallery" pressed.
    GalleryRequested,
    /// The async capture attempt finished.
    Resolved {
        source: Source,
        resolution: Resolution,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Spawn a capture attempt against the given source.
    CaptureRequested(Source),
    /// An image arrived; append it and show the matching success notice.
    Captured { source: Source, image: ImageRef },
    /// Permission was refused; show the matching notice.
    PermissionDenied(Source),
    /// The platform reported an error; show it, non-fatally.
    Failed(CaptureError),
    /// Navigate to the gallery.
    OpenGallery,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Hook fired when the screen regains visibility.
    ///
    /// Nothing to refresh here today; the hook exists so the navigation
    /// layer treats both screens uniformly.
    pub fn on_focus(&mut self) {}

    /// Advances the state machine and reports what the application should
    /// do about it.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::OpenMenu => {
                if self.phase == Phase::Idle {
                    self.phase = Phase::OptionMenuOpen;
                }
                Event::None
            }
            Message::CloseMenu => {
                if self.phase == Phase::OptionMenuOpen {
                    self.phase = Phase::Idle;
                }
                Event::None
            }
            Message::SourceSelected(source) => {
                if self.phase != Phase::OptionMenuOpen {
                    return Event::None;
                }
                // The menu closes right away; the request keeps running.
                self.phase = Phase::AwaitingCapture;
                Event::CaptureRequested(source)
            }
            Message::GalleryRequested => {
                if self.phase == Phase::Idle {
                    Event::OpenGallery
                } else {
                    Event::None
                }
            }
            Message::Resolved { source, resolution } => {
                // Every resolution is terminal; the machine never stays in
                // AwaitingCapture.
                self.phase = Phase::Idle;
                match resolution {
                    Resolution::Selected(image) => Event::Captured { source, image },
                    Resolution::Cancelled => Event::None,
                    Resolution::PermissionDenied => Event::PermissionDenied(source),
                    Resolution::Failed(err) => Event::Failed(err),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(source: Source, resolution: Resolution) -> Message {
        Message::Resolved { source, resolution }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(State::new().phase(), Phase::Idle);
    }

    #[test]
    fn open_menu_only_from_idle() {
        let mut state = State::new();
        assert_eq!(state.update(Message::OpenMenu), Event::None);
        assert_eq!(state.phase(), Phase::OptionMenuOpen);

        // A second open is a no-op.
        state.update(Message::OpenMenu);
        assert_eq!(state.phase(), Phase::OptionMenuOpen);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut state = State::new();
        state.update(Message::OpenMenu);
        assert_eq!(state.update(Message::CloseMenu), Event::None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn selecting_a_source_closes_the_menu_and_requests_capture() {
        let mut state = State::new();
        state.update(Message::OpenMenu);

        let event = state.update(Message::SourceSelected(Source::Library));
        assert_eq!(event, Event::CaptureRequested(Source::Library));
        assert_eq!(state.phase(), Phase::AwaitingCapture);
    }

    #[test]
    fn source_selection_outside_the_menu_is_ignored() {
        let mut state = State::new();
        let event = state.update(Message::SourceSelected(Source::Camera));
        assert_eq!(event, Event::None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn successful_resolution_yields_captured_and_idle() {
        let mut state = State::new();
        state.update(Message::OpenMenu);
        state.update(Message::SourceSelected(Source::Library));

        let event = state.update(resolved(
            Source::Library,
            Resolution::Selected(ImageRef::from("file:///a.jpg")),
        ));
        assert_eq!(
            event,
            Event::Captured {
                source: Source::Library,
                image: ImageRef::from("file:///a.jpg"),
            }
        );
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn cancellation_is_silent_and_terminal() {
        let mut state = State::new();
        state.update(Message::OpenMenu);
        state.update(Message::SourceSelected(Source::Library));

        let event = state.update(resolved(Source::Library, Resolution::Cancelled));
        assert_eq!(event, Event::None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn permission_denial_reports_the_source() {
        let mut state = State::new();
        state.update(Message::OpenMenu);
        state.update(Message::SourceSelected(Source::Camera));

        let event = state.update(resolved(Source::Camera, Resolution::PermissionDenied));
        assert_eq!(event, Event::PermissionDenied(Source::Camera));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn failure_reports_the_error_and_returns_to_idle() {
        let mut state = State::new();
        state.update(Message::OpenMenu);
        state.update(Message::SourceSelected(Source::Camera));

        let err = CaptureError::Unavailable("no camera device available".into());
        let event = state.update(resolved(Source::Camera, Resolution::Failed(err.clone())));
        assert_eq!(event, Event::Failed(err));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn gallery_request_only_from_idle() {
        let mut state = State::new();
        assert_eq!(state.update(Message::GalleryRequested), Event::OpenGallery);

        state.update(Message::OpenMenu);
        assert_eq!(state.update(Message::GalleryRequested), Event::None);
    }
}
