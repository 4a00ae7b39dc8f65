// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Capture(CaptureError),
}

/// Specific error types for capture and picker failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No capture device is available (e.g. no camera on this machine).
    Unavailable(String),

    /// The selected file could not be decoded as an image.
    NotAnImage(String),

    /// The file could not be read (permissions, vanished file, ...).
    Io(String),

    /// Generic platform error with raw message.
    Other(String),
}

impl CaptureError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CaptureError::Unavailable(_) => "error-capture-unavailable",
            CaptureError::NotAnImage(_) => "error-capture-not-an-image",
            CaptureError::Io(_) => "error-capture-io",
            CaptureError::Other(_) => "error-capture-general",
        }
    }

    /// Returns the raw platform message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            CaptureError::Unavailable(msg)
            | CaptureError::NotAnImage(msg)
            | CaptureError::Io(msg)
            | CaptureError::Other(msg) => msg,
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Unavailable(msg) => write!(f, "Capture device unavailable: {}", msg),
            CaptureError::NotAnImage(msg) => write!(f, "Not a decodable image: {}", msg),
            CaptureError::Io(msg) => write!(f, "I/O error: {}", msg),
            CaptureError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Capture(e) => write!(f, "Capture Error: {}", e),
        }
    }
}

impl From<CaptureError> for Error {
    fn from(err: CaptureError) -> Self {
        Error::Capture(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
