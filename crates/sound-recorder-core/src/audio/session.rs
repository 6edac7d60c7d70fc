use crate::{
    CoreResult,
    audio::{AudioClip, capture::AudioCapturer, clip::CHANNELS},
    store::{RecordingFormat, RecordingStore},
};

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, instrument, warn};

/// Capture session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not currently recording.
    Idle,
    /// An input stream is open and delivering blocks.
    Recording,
}

/// Manages exactly one capture stream at a time and turns delivered sample
/// blocks into a persisted recording.
///
/// Owned by the top-level application object; there is no process-global
/// recording state. Start and stop are idempotent: calling either in the
/// wrong state warns and no-ops instead of corrupting the stream.
pub struct CaptureSession {
    /// Device wrapper, constructed on first start so a session can exist
    /// (and answer state queries) without a microphone present.
    capturer: Option<AudioCapturer>,
    state: SessionState,
    current_recording: Option<String>,
}

impl CaptureSession {
    /// Create an idle session. Does not touch the audio device.
    pub fn new() -> Self {
        Self {
            capturer: None,
            state: SessionState::Idle,
            current_recording: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True while an input stream is open.
    pub fn is_recording(&self) -> bool {
        self.state == SessionState::Recording
    }

    /// Filename of the most recently stopped recording, if any.
    pub fn current_recording(&self) -> Option<&str> {
        self.current_recording.as_deref()
    }

    /// Open the input stream and begin accumulating blocks.
    ///
    /// A second start while Recording warns and no-ops; it must not leak
    /// another stream.
    ///
    /// # Errors
    ///
    /// Returns error if no input device exists or the stream cannot be
    /// opened.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self) -> CoreResult<()> {
        if self.state == SessionState::Recording {
            warn!("Recording already in progress");
            return Ok(());
        }

        if self.capturer.is_none() {
            self.capturer = Some(AudioCapturer::new()?);
        }

        if let Some(capturer) = self.capturer.as_mut() {
            capturer.start()?;
            self.state = SessionState::Recording;
            info!("Recording started");
        }

        Ok(())
    }

    /// Close the stream, finalize the accumulated blocks and persist the
    /// artifact as `recording_<epoch-secs>.wav` in `store`.
    ///
    /// Returns the generated filename, or `None` (with a warning) when no
    /// recording was active. Stopping with zero delivered blocks persists
    /// a valid silent zero-duration artifact.
    ///
    /// # Errors
    ///
    /// Returns error if the artifact cannot be written to the store.
    #[track_caller]
    #[instrument(skip(self, store))]
    pub fn stop(&mut self, store: &RecordingStore) -> CoreResult<Option<String>> {
        if self.state == SessionState::Idle {
            warn!("No active recording");
            return Ok(None);
        }

        // Transition before persisting: a failed save still leaves the
        // stream closed and the session stoppable again.
        self.state = SessionState::Idle;

        let Some(capturer) = self.capturer.as_mut() else {
            warn!("No active recording");
            return Ok(None);
        };

        let blocks = capturer.stop();
        let clip = AudioClip::from_blocks(blocks, capturer.sample_rate(), CHANNELS);

        let filename = format!("recording_{}.wav", epoch_seconds());

        info!(
            filename = %filename,
            sample_count = clip.samples.len(),
            duration_secs = clip.duration_seconds(),
            "Recording stopped"
        );

        store.save(&filename, &clip, RecordingFormat::Wav)?;
        self.current_recording = Some(filename.clone());

        Ok(Some(filename))
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}

fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
