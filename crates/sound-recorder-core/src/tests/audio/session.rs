use crate::{CaptureSession, RecordingStore, SessionState};

/// WHAT: A fresh session is Idle with no current recording
/// WHY: The state machine starts in a known state without touching hardware
#[test]
fn given_new_session_when_inspecting_then_idle_and_empty() {
    let session = CaptureSession::new();

    assert_eq!(session.state(), SessionState::Idle);
    assert!(!session.is_recording());
    assert!(session.current_recording().is_none());
}

/// WHAT: Stop while Idle is a reported no-op that persists nothing
/// WHY: Repeated stop calls must not fail or create files
#[test]
#[allow(clippy::unwrap_used)]
fn given_idle_session_when_stopping_then_noop_and_store_unchanged() {
    // Given: An idle session and an empty store
    let dir = tempfile::tempdir().unwrap();
    let store = RecordingStore::open(dir.path()).unwrap();
    let mut session = CaptureSession::new();

    // When: Stopping twice without ever starting
    let first = session.stop(&store).unwrap();
    let second = session.stop(&store).unwrap();

    // Then: No filename, no state change, no files
    assert!(first.is_none());
    assert!(second.is_none());
    assert_eq!(session.state(), SessionState::Idle);
    assert!(store.list().unwrap().is_empty());
}

/// WHAT: Live start/stop captures and persists a timestamped WAV
/// WHY: End-to-end check of the session lifecycle against real hardware
#[cfg(feature = "integration-tests")]
#[test]
#[allow(clippy::unwrap_used)]
fn given_live_device_when_recording_briefly_then_wav_persisted() {
    // Given: A real input device and an empty store
    let dir = tempfile::tempdir().unwrap();
    let store = RecordingStore::open(dir.path()).unwrap();
    let mut session = CaptureSession::new();

    // When: Recording for a short interval
    session.start().unwrap();
    assert!(session.is_recording());

    // And: A second start is a no-op, not a second stream
    session.start().unwrap();
    assert!(session.is_recording());

    std::thread::sleep(std::time::Duration::from_millis(200));
    let saved = session.stop(&store).unwrap();

    // Then: A recording_<epoch>.wav exists in the store
    let filename = saved.unwrap();
    assert!(filename.starts_with("recording_"));
    assert!(filename.ends_with(".wav"));
    assert_eq!(session.current_recording(), Some(filename.as_str()));
    assert!(store.list().unwrap().contains(&filename));
}
