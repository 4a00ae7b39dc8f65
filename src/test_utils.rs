// SPDX-License-Identifier: MPL-2.0
//! Test support: a scriptable capture gateway.
//!
//! `MockGateway` answers the capture port with pre-arranged outcomes so
//! unit and integration tests can drive every capture path without native
//! dialogs.

use crate::collection::ImageRef;
use crate::error::CaptureError;
use crate::gateway::{CaptureOutcome, MediaCaptureGateway, Permission, PickerConfig};
use futures_util::future::{self, BoxFuture, FutureExt};

/// Gateway whose answers are fixed up front.
///
/// Defaults: both permissions granted, both capture calls cancelled.
#[derive(Debug, Clone)]
pub struct MockGateway {
    library_permission: Permission,
    camera_permission: Permission,
    library_result: Result<CaptureOutcome, CaptureError>,
    camera_result: Result<CaptureOutcome, CaptureError>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self {
            library_permission: Permission::Granted,
            camera_permission: Permission::Granted,
            library_result: Ok(CaptureOutcome::Cancelled),
            camera_result: Ok(CaptureOutcome::Cancelled),
        }
    }
}

impl MockGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Library picks resolve to the given URI.
    #[must_use]
    pub fn with_library_pick(mut self, uri: &str) -> Self {
        self.library_result = Ok(CaptureOutcome::Selected(ImageRef::from(uri)));
        self
    }

    /// Camera captures resolve to the given URI.
    #[must_use]
    pub fn with_camera_capture(mut self, uri: &str) -> Self {
        self.camera_result = Ok(CaptureOutcome::Selected(ImageRef::from(uri)));
        self
    }

    /// Camera captures fail with a hardware error.
    #[must_use]
    pub fn with_camera_failure(mut self) -> Self {
        self.camera_result = Err(CaptureError::Unavailable(
            "no camera device available".to_string(),
        ));
        self
    }

    /// Library permission is refused.
    #[must_use]
    pub fn deny_library(mut self) -> Self {
        self.library_permission = Permission::Denied;
        self
    }

    /// Camera permission is refused.
    #[must_use]
    pub fn deny_camera(mut self) -> Self {
        self.camera_permission = Permission::Denied;
        self
    }
}

impl MediaCaptureGateway for MockGateway {
    fn request_library_permission(&self) -> BoxFuture<'static, Permission> {
        future::ready(self.library_permission).boxed()
    }

    fn request_camera_permission(&self) -> BoxFuture<'static, Permission> {
        future::ready(self.camera_permission).boxed()
    }

    fn pick_from_library(
        &self,
        _config: PickerConfig,
    ) -> BoxFuture<'static, Result<CaptureOutcome, CaptureError>> {
        future::ready(self.library_result.clone()).boxed()
    }

    fn capture_from_camera(
        &self,
        _config: PickerConfig,
    ) -> BoxFuture<'static, Result<CaptureOutcome, CaptureError>> {
        future::ready(self.camera_result.clone()).boxed()
    }
}
