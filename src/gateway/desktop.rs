// SPDX-License-Identifier: MPL-2.0
//! Desktop adapter for the capture port, built on native file dialogs.
//!
//! Desktops have no upfront permission broker: opening the dialog *is* the
//! user's consent, so both permission requests resolve to granted. The two
//! calls stay separate at the trait level because mobile adapters answer
//! them independently. There is no camera stack here either; camera capture
//! reports the device as unavailable.

use super::{CaptureOutcome, MediaCaptureGateway, Permission, PickerConfig};
use crate::collection::ImageRef;
use crate::error::CaptureError;
use futures_util::future::{self, BoxFuture, FutureExt};
use std::path::Path;

/// Extensions offered by the picker filter.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Gateway backed by `rfd`'s async file dialogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdGateway;

impl RfdGateway {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MediaCaptureGateway for RfdGateway {
    fn request_library_permission(&self) -> BoxFuture<'static, Permission> {
        future::ready(Permission::Granted).boxed()
    }

    fn request_camera_permission(&self) -> BoxFuture<'static, Permission> {
        future::ready(Permission::Granted).boxed()
    }

    fn pick_from_library(
        &self,
        _config: PickerConfig,
    ) -> BoxFuture<'static, Result<CaptureOutcome, CaptureError>> {
        // The edit/aspect/quality hints have no counterpart in the desktop
        // dialog; only the extension filter applies.
        async move {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Select an Image")
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await;

            match picked {
                None => Ok(CaptureOutcome::Cancelled),
                Some(handle) => {
                    let path = handle.path().to_path_buf();
                    validate_image(&path)?;
                    Ok(CaptureOutcome::Selected(ImageRef::from(path)))
                }
            }
        }
        .boxed()
    }

    fn capture_from_camera(
        &self,
        _config: PickerConfig,
    ) -> BoxFuture<'static, Result<CaptureOutcome, CaptureError>> {
        future::ready(Err(CaptureError::Unavailable(
            "no camera device available".to_string(),
        )))
        .boxed()
    }
}

/// Checks that the picked file decodes as a known image format.
///
/// Only the header is inspected; the gallery loads pixels lazily later.
fn validate_image(path: &Path) -> Result<(), CaptureError> {
    let reader = image_rs::ImageReader::open(path)
        .map_err(|err| CaptureError::Io(err.to_string()))?
        .with_guessed_format()
        .map_err(|err| CaptureError::Io(err.to_string()))?;

    if reader.format().is_none() {
        return Err(CaptureError::NotAnImage(path.display().to_string()));
    }

    Ok(())
}
