// SPDX-License-Identifier: MPL-2.0
//! Platform media-capture port.
//!
//! [`MediaCaptureGateway`] is the boundary between the application and the
//! platform's permission and media-capture machinery. The application only
//! ever sees the tagged outcomes defined here; adapters translate native
//! dialogs, permission brokers, and camera stacks into them.
//!
//! Methods return boxed futures rather than `async fn` so the trait stays
//! object-safe and callers can hand the futures straight to `iced::Task`.

pub mod desktop;

pub use desktop::RfdGateway;

use crate::collection::ImageRef;
use crate::error::CaptureError;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Options forwarded to the native picker or camera.
///
/// Mirrors what the platform pickers accept; adapters honor what their
/// platform supports and ignore the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerConfig {
    /// Let the platform picker offer its built-in crop/edit step.
    pub allow_editing: bool,
    /// Aspect ratio hint for the edit step, width:height.
    pub aspect_ratio: (u8, u8),
    /// Quality hint in `0.0..=1.0`, 1.0 = maximum.
    pub quality: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            allow_editing: true,
            aspect_ratio: (4, 3),
            quality: 1.0,
        }
    }
}

/// Result of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Terminal outcome of a picker or camera invocation that did not error.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// The user selected or captured an image.
    Selected(ImageRef),
    /// The user backed out of the picker. Not an error.
    Cancelled,
}

/// Which capture entry point the user chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Library,
    Camera,
}

/// Port consumed by the capture screen.
///
/// Library and camera permissions are requested independently; one being
/// granted implies nothing about the other.
pub trait MediaCaptureGateway: Send + Sync {
    fn request_library_permission(&self) -> BoxFuture<'static, Permission>;

    fn request_camera_permission(&self) -> BoxFuture<'static, Permission>;

    fn pick_from_library(
        &self,
        config: PickerConfig,
    ) -> BoxFuture<'static, Result<CaptureOutcome, CaptureError>>;

    fn capture_from_camera(
        &self,
        config: PickerConfig,
    ) -> BoxFuture<'static, Result<CaptureOutcome, CaptureError>>;
}

/// Shared handle to the gateway, cloneable into async tasks.
pub type SharedGateway = Arc<dyn MediaCaptureGateway>;

/// Fully resolved capture attempt.
///
/// The four variants are mutually exclusive and all terminal: whichever
/// arrives, the capture state machine returns to idle.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Selected(ImageRef),
    Cancelled,
    PermissionDenied,
    Failed(CaptureError),
}

/// Runs one capture attempt end to end: permission request first, then the
/// picker or camera, mapped into a single [`Resolution`].
pub async fn resolve(gateway: SharedGateway, source: Source, config: PickerConfig) -> Resolution {
    let permission = match source {
        Source::Library => gateway.request_library_permission().await,
        Source::Camera => gateway.request_camera_permission().await,
    };

    if permission == Permission::Denied {
        log::debug!("{source:?} permission denied, aborting capture");
        return Resolution::PermissionDenied;
    }

    let outcome = match source {
        Source::Library => gateway.pick_from_library(config).await,
        Source::Camera => gateway.capture_from_camera(config).await,
    };

    match outcome {
        Ok(CaptureOutcome::Selected(image)) => Resolution::Selected(image),
        Ok(CaptureOutcome::Cancelled) => Resolution::Cancelled,
        Err(err) => {
            log::warn!("capture via {source:?} failed: {err}");
            Resolution::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockGateway;

    #[test]
    fn default_picker_config_matches_platform_defaults() {
        let config = PickerConfig::default();
        assert!(config.allow_editing);
        assert_eq!(config.aspect_ratio, (4, 3));
        assert_eq!(config.quality, 1.0);
    }

    #[tokio::test]
    async fn resolve_maps_selection() {
        let gateway: SharedGateway =
            Arc::new(MockGateway::new().with_library_pick("file:///photos/cat.jpg"));
        let resolution = resolve(gateway, Source::Library, PickerConfig::default()).await;
        assert_eq!(
            resolution,
            Resolution::Selected(ImageRef::from("file:///photos/cat.jpg"))
        );
    }

    #[tokio::test]
    async fn resolve_maps_cancellation() {
        let gateway: SharedGateway = Arc::new(MockGateway::new());
        let resolution = resolve(gateway, Source::Library, PickerConfig::default()).await;
        assert_eq!(resolution, Resolution::Cancelled);
    }

    #[tokio::test]
    async fn resolve_short_circuits_on_denied_permission() {
        let gateway = MockGateway::new()
            .with_library_pick("file:///photos/cat.jpg")
            .deny_library();
        let shared: SharedGateway = Arc::new(gateway);
        let resolution = resolve(shared.clone(), Source::Library, PickerConfig::default()).await;
        assert_eq!(resolution, Resolution::PermissionDenied);
    }

    #[tokio::test]
    async fn camera_permission_is_requested_independently() {
        // Library granted, camera denied: the camera flow must still be refused.
        let gateway: SharedGateway = Arc::new(
            MockGateway::new()
                .with_camera_capture("file:///camera/shot.jpg")
                .deny_camera(),
        );
        let resolution = resolve(gateway, Source::Camera, PickerConfig::default()).await;
        assert_eq!(resolution, Resolution::PermissionDenied);
    }

    #[tokio::test]
    async fn resolve_maps_gateway_errors() {
        let gateway: SharedGateway = Arc::new(MockGateway::new().with_camera_failure());
        let resolution = resolve(gateway, Source::Camera, PickerConfig::default()).await;
        assert!(matches!(resolution, Resolution::Failed(_)));
    }
}
