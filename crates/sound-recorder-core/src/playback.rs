//! Detached playback through the external media player.

use crate::{CoreResult, RecorderError};

use std::{
    io::ErrorKind,
    panic::Location,
    path::Path,
    process::{Command, Stdio},
};

use error_location::ErrorLocation;
use tracing::{info, instrument};

/// External player executable, expected on the system path.
pub(crate) const PLAYER_BIN: &str = "ffplay";

/// Launch the external player on `path` as a detached process.
///
/// The child handle is dropped immediately: playback is abandon-on-launch,
/// with no cancellation and no waiting for completion. The player exits on
/// its own once the file ends.
///
/// Whether the target exists is the caller's concern; an absent file is a
/// reported no-op at the surface, not a launch failure.
///
/// # Errors
///
/// Returns `ExternalToolMissing` when the player executable is absent and
/// `Io` for other spawn failures.
#[track_caller]
#[instrument]
pub fn launch(path: &Path) -> CoreResult<()> {
    let result = Command::new(PLAYER_BIN)
        .args(["-nodisp", "-autoexit"])
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match result {
        Err(e) if e.kind() == ErrorKind::NotFound => Err(RecorderError::ExternalToolMissing {
            tool: PLAYER_BIN.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(e) => Err(e.into()),
        Ok(child) => {
            info!(path = ?path, pid = child.id(), "Playback launched");
            // Handle dropped on purpose: the process is left to run and
            // exit on its own.
            drop(child);
            Ok(())
        }
    }
}
