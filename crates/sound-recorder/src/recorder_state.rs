use std::time::{Duration, Instant};

use uuid::Uuid;

/// Recording state snapshot for the command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    /// Not currently recording.
    Idle,
    /// Currently recording audio.
    Recording {
        /// When recording started.
        started_at: Instant,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}

impl RecorderState {
    /// Start a new recording snapshot with a fresh correlation ID.
    pub(crate) fn begin() -> Self {
        Self::Recording {
            started_at: Instant::now(),
            session_id: Uuid::new_v4(),
        }
    }

    /// Correlation ID of the active recording, `None` while idle.
    pub(crate) fn session_id(&self) -> Option<Uuid> {
        match self {
            Self::Idle => None,
            Self::Recording { session_id, .. } => Some(*session_id),
        }
    }

    /// Time since the active recording started, `None` while idle.
    pub(crate) fn elapsed(&self) -> Option<Duration> {
        match self {
            Self::Idle => None,
            Self::Recording { started_at, .. } => Some(started_at.elapsed()),
        }
    }
}
