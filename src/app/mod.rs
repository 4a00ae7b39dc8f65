// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the two screens.
//!
//! The `App` struct owns the image collection - the single source of truth
//! for the session - and wires it to the capture and gallery screens, the
//! capture gateway, localization, and notifications. Navigation lives here
//! too: the screen enum, the switch handler, the window title carrying the
//! live image count, and the focus hook fired when a screen regains
//! visibility.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::collection::ImageCollection;
use crate::config;
use crate::gateway::{RfdGateway, SharedGateway};
use crate::i18n::fluent::I18n;
use crate::ui::capture;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// The session's image collection; created empty, never persisted.
    collection: ImageCollection,
    capture: capture::State,
    gallery: gallery::State,
    notifications: notifications::Manager,
    gateway: SharedGateway,
    theme_mode: ThemeMode,
    /// Last known window size, feeding the gallery's mount-time cell size.
    window_size: iced::Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("collection_count", &self.collection.count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Capture,
            collection: ImageCollection::new(),
            capture: capture::State::new(),
            gallery: gallery::State::default(),
            notifications: notifications::Manager::new(),
            gateway: Arc::new(RfdGateway::new()),
            theme_mode: ThemeMode::System,
            window_size: iced::Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            ),
        }
    }
}

impl App {
    /// Initializes application state from configuration and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            gallery: gallery::State::new(config.gallery_sync),
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Builds an app around a specific gateway implementation.
    ///
    /// This is how tests (and future platform ports) swap the desktop
    /// dialogs for their own capture backend.
    #[must_use]
    pub fn with_gateway(gateway: SharedGateway) -> Self {
        Self {
            gateway,
            ..Self::default()
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.screen {
            Screen::Capture => app_name,
            Screen::Gallery => {
                let gallery_title = self
                    .i18n
                    .tr_count("gallery-title", self.gallery.count(&self.collection));
                format!("{gallery_title} - {app_name}")
            }
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            collection: &mut self.collection,
            capture: &mut self.capture,
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
            gateway: &self.gateway,
            window_size: &self.window_size,
        };

        match message {
            Message::Capture(capture_message) => {
                update::handle_capture_message(&mut ctx, capture_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            collection: &self.collection,
            capture: &self.capture,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::ImageRef;
    use crate::error::CaptureError;
    use crate::gateway::{Resolution, Source};
    use crate::ui::capture::Phase;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(config::CONFIG_DIR_ENV).ok();
        std::env::set_var(config::CONFIG_DIR_ENV, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(config::CONFIG_DIR_ENV, value);
        } else {
            std::env::remove_var(config::CONFIG_DIR_ENV);
        }
    }

    fn resolved(source: Source, resolution: Resolution) -> Message {
        Message::Capture(capture::Message::Resolved { source, resolution })
    }

    fn add_image(app: &mut App, uri: &str) {
        let _ = app.update(Message::Capture(capture::Message::OpenMenu));
        let _ = app.update(Message::Capture(capture::Message::SourceSelected(
            Source::Library,
        )));
        let _ = app.update(resolved(
            Source::Library,
            Resolution::Selected(ImageRef::from(uri)),
        ));
    }

    #[test]
    fn new_starts_on_capture_with_empty_collection() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Capture);
            assert_eq!(app.collection.count(), 0);
            assert!(!app.notifications.has_notifications());
        });
    }

    #[test]
    fn corrupt_config_warns_but_starts() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "language = [broken").expect("write");
            let (app, _task) = App::new(Flags::default());
            assert!(app.notifications.has_notifications());
            assert_eq!(app.collection.count(), 0);
        });
    }

    #[test]
    fn config_sync_mode_reaches_the_gallery() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "gallery_sync = \"snapshot\"\n")
                .expect("write");
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.gallery.mode(), gallery::SyncMode::Snapshot);
        });
    }

    #[test]
    fn successful_library_capture_appends_and_notifies() {
        let mut app = App::with_gateway(Arc::new(
            crate::test_utils::MockGateway::new().with_library_pick("file:///photos/cat.jpg"),
        ));
        add_image(&mut app, "file:///photos/cat.jpg");

        assert_eq!(app.collection.count(), 1);
        assert_eq!(app.collection.list()[0].as_str(), "file:///photos/cat.jpg");
        assert_eq!(app.capture_phase(), Phase::Idle);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn cancelled_capture_changes_nothing_and_stays_silent() {
        let mut app = App::default();
        let _ = app.update(Message::Capture(capture::Message::OpenMenu));
        let _ = app.update(Message::Capture(capture::Message::SourceSelected(
            Source::Library,
        )));
        let _ = app.update(resolved(Source::Library, Resolution::Cancelled));

        assert_eq!(app.collection.count(), 0);
        assert_eq!(app.capture_phase(), Phase::Idle);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn denied_permission_warns_without_mutating() {
        let mut app = App::default();
        let _ = app.update(Message::Capture(capture::Message::OpenMenu));
        let _ = app.update(Message::Capture(capture::Message::SourceSelected(
            Source::Camera,
        )));
        let _ = app.update(resolved(Source::Camera, Resolution::PermissionDenied));

        assert_eq!(app.collection.count(), 0);
        assert_eq!(app.capture_phase(), Phase::Idle);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn capture_failure_surfaces_the_platform_message() {
        let mut app = App::default();
        let _ = app.update(Message::Capture(capture::Message::OpenMenu));
        let _ = app.update(Message::Capture(capture::Message::SourceSelected(
            Source::Camera,
        )));
        let _ = app.update(resolved(
            Source::Camera,
            Resolution::Failed(CaptureError::Unavailable("no camera device available".into())),
        ));

        assert_eq!(app.collection.count(), 0);
        let notification = app.notifications.visible().next().expect("one toast");
        assert_eq!(notification.message_key(), "error-capture-unavailable");
        assert!(notification
            .message_args()
            .iter()
            .any(|(k, v)| k.as_str() == "reason" && v.contains("camera")));
    }

    #[test]
    fn opening_the_gallery_switches_and_mounts() {
        let mut app = App::default();
        add_image(&mut app, "file:///a.jpg");

        let _ = app.update(Message::Capture(capture::Message::GalleryRequested));

        assert_eq!(app.screen, Screen::Gallery);
        // Default window width 420: (420 - 60) / 3 = 120
        assert_eq!(app.gallery.cell_size(), 120.0);
    }

    #[test]
    fn window_resize_feeds_the_next_gallery_mount() {
        let mut app = App::default();
        add_image(&mut app, "file:///a.jpg");

        let _ = app.update(Message::WindowResized(iced::Size::new(390.0, 700.0)));
        let _ = app.update(Message::SwitchScreen(Screen::Gallery));

        assert_eq!(app.gallery.cell_size(), 110.0);
    }

    #[test]
    fn navbar_back_returns_to_capture() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Gallery));
        assert_eq!(app.screen, Screen::Gallery);

        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::Back));
        assert_eq!(app.screen, Screen::Capture);
    }

    #[test]
    fn confirmed_delete_removes_from_the_collection() {
        let mut app = App::default();
        add_image(&mut app, "file:///a.jpg");
        add_image(&mut app, "file:///b.jpg");
        let _ = app.update(Message::SwitchScreen(Screen::Gallery));

        let _ = app.update(Message::Gallery(gallery::Message::DeleteRequested(0)));
        let _ = app.update(Message::Gallery(gallery::Message::DeleteConfirmed));

        assert_eq!(app.collection.count(), 1);
        assert_eq!(app.collection.list()[0].as_str(), "file:///b.jpg");
    }

    #[test]
    fn stale_delete_is_swallowed() {
        let mut app = App::default();
        add_image(&mut app, "file:///a.jpg");
        let _ = app.update(Message::SwitchScreen(Screen::Gallery));

        // Prompt built against an index that no longer exists.
        let _ = app.update(Message::Gallery(gallery::Message::DeleteRequested(5)));
        let _ = app.update(Message::Gallery(gallery::Message::DeleteConfirmed));

        assert_eq!(app.collection.count(), 1, "collection unchanged");
        assert!(!app.notifications.has_notifications(), "no user-visible error");
    }

    #[test]
    fn snapshot_gallery_misses_later_appends_live_sees_them() {
        let mut live = App::default();
        add_image(&mut live, "file:///a.jpg");
        let _ = live.update(Message::SwitchScreen(Screen::Gallery));
        add_image(&mut live, "file:///b.jpg");
        assert_eq!(live.gallery.count(&live.collection), 2);

        let mut snap = App::default();
        snap.gallery = gallery::State::new(gallery::SyncMode::Snapshot);
        add_image(&mut snap, "file:///a.jpg");
        let _ = snap.update(Message::SwitchScreen(Screen::Gallery));
        add_image(&mut snap, "file:///b.jpg");
        assert_eq!(snap.gallery.count(&snap.collection), 1);
        assert_eq!(snap.collection.count(), 2);
    }

    #[test]
    fn title_shows_app_name_on_capture_screen() {
        let app = App::default();
        assert_eq!(app.title(), "SnapGrid");
    }

    #[test]
    fn title_carries_the_live_count_on_the_gallery() {
        let mut app = App::default();
        add_image(&mut app, "file:///a.jpg");
        add_image(&mut app, "file:///b.jpg");
        let _ = app.update(Message::SwitchScreen(Screen::Gallery));

        let title = app.title();
        assert!(title.contains('2'), "got: {title}");
        assert!(title.contains("SnapGrid"), "got: {title}");

        // The count tracks deletions too, not the value at navigation time.
        let _ = app.update(Message::Gallery(gallery::Message::DeleteRequested(0)));
        let _ = app.update(Message::Gallery(gallery::Message::DeleteConfirmed));
        assert!(app.title().contains('1'), "got: {}", app.title());
    }

    impl App {
        fn capture_phase(&self) -> Phase {
            self.capture.phase()
        }
    }
}
