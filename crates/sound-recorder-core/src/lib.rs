//! Sound Recorder Core Library
//!
//! Microphone capture, recordings-directory storage, compressed-format
//! conversion and detached playback, built on CPAL and hound.
//!
//! # Example
//!
//! ```no_run
//! use sound_recorder_core::{CaptureSession, CoreResult, RecordingStore};
//!
//! use std::{thread::sleep, time::Duration};
//!
//! fn main() -> CoreResult<()> {
//!     let store = RecordingStore::open("recordings")?;
//!     let mut session = CaptureSession::new();
//!
//!     session.start()?;
//!     sleep(Duration::from_secs(3));
//!     let saved = session.stop(&store)?;
//!
//!     println!("Saved: {:?}", saved);
//!     Ok(())
//! }
//! ```

mod audio;
pub mod convert;
mod error;
pub mod playback;
mod store;

pub use {
    audio::{AudioClip, CHANNELS, CaptureSession, SAMPLE_RATE, SessionState},
    error::{RecorderError, Result as CoreResult},
    store::{RecordingFormat, RecordingStore},
};

#[cfg(test)]
mod tests;
