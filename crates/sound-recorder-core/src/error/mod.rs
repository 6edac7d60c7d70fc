use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recorder errors with source location tracking.
///
/// Invalid-state and not-found conditions are deliberately not variants:
/// they are warn-and-no-op outcomes surfaced through `Ok(None)` and
/// `Ok(false)` returns rather than failures.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// No audio input device found.
    #[error("No microphone found {location}")]
    NoMicrophoneFound {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio device operation failed.
    #[error("Audio device error: {reason} {location}")]
    DeviceError {
        /// Description of the device error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Recording name escapes the managed directory.
    #[error("Invalid recording name: {name:?} {location}")]
    InvalidFilename {
        /// The rejected file name.
        name: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Encoder or decoder could not process the data or format.
    #[error("Encoding failed: {reason} {location}")]
    EncodingFailure {
        /// Description of the encoding failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// External playback or conversion executable is absent.
    #[error("External tool not found: {tool} {location}")]
    ExternalToolMissing {
        /// Name of the missing executable.
        tool: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

// Manual From impls with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<std::io::Error> for RecorderError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        RecorderError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<hound::Error> for RecorderError {
    #[track_caller]
    fn from(source: hound::Error) -> Self {
        RecorderError::EncodingFailure {
            reason: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;
