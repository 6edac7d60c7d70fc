//! Compressed-format conversion through the external encoder.

use crate::{CoreResult, RecorderError};

use std::{
    fs,
    io::ErrorKind,
    panic::Location,
    path::{Path, PathBuf},
    process::Command,
};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

/// External encoder executable, expected on the system path.
pub(crate) const ENCODER_BIN: &str = "ffmpeg";

/// Input containers accepted for conversion.
pub(crate) const SUPPORTED_INPUTS: &[&str] = &["wav", "ogg", "flac", "mp4", "m4a", "aac"];

const COMPRESSED_EXTENSION: &str = "mp3";

/// Whether the file's extension is on the conversion allow-list.
pub(crate) fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_INPUTS.contains(&ext.as_str())
        })
}

/// Decode `input` and write a compressed copy at the same base name.
///
/// Returns the new path on success. Failures (unrecognized or corrupt
/// input, encoder failure, missing encoder) leave no output file behind.
///
/// # Errors
///
/// Returns `EncodingFailure` for unrecognized or undecodable input and
/// `ExternalToolMissing` when the encoder executable is absent.
#[track_caller]
#[instrument]
pub fn to_compressed(input: &Path) -> CoreResult<PathBuf> {
    if !is_supported_input(input) {
        return Err(RecorderError::EncodingFailure {
            reason: format!("Unrecognized input container: {}", input.display()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if !input.is_file() {
        return Err(RecorderError::EncodingFailure {
            reason: format!("Input file not found: {}", input.display()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let output = input.with_extension(COMPRESSED_EXTENSION);
    run_encoder(input, &output)?;

    info!(input = ?input, output = ?output, "File converted to compressed format");

    Ok(output)
}

/// Run the external encoder to completion, capturing its output.
///
/// A failed run removes any partial output file so failure never yields a
/// path *and* a file.
#[track_caller]
pub(crate) fn run_encoder(input: &Path, output: &Path) -> CoreResult<()> {
    let result = Command::new(ENCODER_BIN)
        .args(["-y", "-loglevel", "error", "-i"])
        .arg(input)
        .arg(output)
        .output();

    match result {
        Err(e) if e.kind() == ErrorKind::NotFound => Err(RecorderError::ExternalToolMissing {
            tool: ENCODER_BIN.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(e) => Err(e.into()),
        Ok(out) if !out.status.success() => {
            if output.exists() {
                if let Err(e) = fs::remove_file(output) {
                    warn!(output = ?output, "Failed to remove partial output: {}", e);
                }
            }
            Err(RecorderError::EncodingFailure {
                reason: String::from_utf8_lossy(&out.stderr).trim().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
        Ok(_) => Ok(()),
    }
}
