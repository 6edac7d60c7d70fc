//! Directory-backed CRUD over persisted recordings.
//!
//! One logical recording maps to exactly one regular file in the managed
//! directory. Listings re-read the directory every time; nothing is cached.

use crate::{CoreResult, RecorderError, audio::AudioClip, convert};

use std::{
    fs,
    panic::Location,
    path::{Component, Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

/// Container format for persisted recordings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingFormat {
    /// Uncompressed PCM WAV (capture format).
    Wav,
    /// Compressed MP3 via the external encoder.
    Mp3,
}

/// Handle on the managed recordings directory.
///
/// Cheap to clone; every operation resolves against the directory at call
/// time. Concurrent callers are not serialized against each other, which
/// is acceptable for single-user, single-process use.
#[derive(Debug, Clone)]
pub struct RecordingStore {
    dir: PathBuf,
}

impl RecordingStore {
    /// Open the managed directory, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[track_caller]
    #[instrument(skip(dir))]
    pub fn open<P: AsRef<Path>>(dir: P) -> CoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        info!(dir = ?dir, "Recording store opened");

        Ok(Self { dir })
    }

    /// The managed directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a recording name against the managed directory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilename` for names with path separators or parent
    /// components, which would escape the directory.
    #[track_caller]
    pub fn path_of(&self, filename: &str) -> CoreResult<PathBuf> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.dir.join(filename)),
            _ => Err(RecorderError::InvalidFilename {
                name: filename.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Write `clip` under `filename` in the requested container.
    ///
    /// An existing file of the same name is overwritten; uniqueness in
    /// practice comes from the caller's timestamp naming.
    ///
    /// # Errors
    ///
    /// Returns error if the name is invalid, the path is not writable or
    /// the encoder cannot produce the target format.
    #[track_caller]
    #[instrument(skip(self, clip))]
    pub fn save(
        &self,
        filename: &str,
        clip: &AudioClip,
        format: RecordingFormat,
    ) -> CoreResult<PathBuf> {
        let path = self.path_of(filename)?;

        match format {
            RecordingFormat::Wav => write_wav(&path, clip)?,
            RecordingFormat::Mp3 => {
                // The external encoder only reads files, so compressed
                // saves go through a temporary WAV beside the target.
                let temp = path.with_extension("tmp.wav");
                write_wav(&temp, clip)?;
                let encoded = convert::run_encoder(&temp, &path);
                if let Err(e) = fs::remove_file(&temp) {
                    warn!(temp = ?temp, "Failed to remove temporary WAV: {}", e);
                }
                encoded?;
            }
        }

        info!(path = ?path, sample_count = clip.samples.len(), "File saved");

        Ok(path)
    }

    /// Remove a recording. An absent name is a reported no-op, returning
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns error if the name is invalid or removal fails.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn delete(&self, filename: &str) -> CoreResult<bool> {
        let path = self.path_of(filename)?;

        if !path.exists() {
            warn!("{} does not exist", filename);
            return Ok(false);
        }

        fs::remove_file(&path)?;
        info!("{} deleted", filename);

        Ok(true)
    }

    /// Rename a recording within the managed directory.
    ///
    /// An absent `old_name` is a reported no-op. An existing `new_name`
    /// refuses the rename rather than silently overwriting it; both cases
    /// return `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns error if either name is invalid or the rename fails.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn rename(&self, old_name: &str, new_name: &str) -> CoreResult<bool> {
        let old_path = self.path_of(old_name)?;
        let new_path = self.path_of(new_name)?;

        if !old_path.exists() {
            warn!("{} does not exist", old_name);
            return Ok(false);
        }

        if new_path.exists() {
            warn!("Refusing rename: {} already exists", new_name);
            return Ok(false);
        }

        fs::rename(&old_path, &new_path)?;
        info!("Renamed {} to {}", old_name, new_name);

        Ok(true)
    }

    /// Freshly enumerate the regular files in the managed directory.
    ///
    /// No ordering guarantee beyond what the directory enumeration yields;
    /// directories and non-regular entries are excluded.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be read.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn list(&self) -> CoreResult<Vec<String>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                entries.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(entries)
    }

    /// Convert a stored recording to the compressed format, returning the
    /// new file's path.
    ///
    /// # Errors
    ///
    /// Returns error if the name is invalid, the input container is
    /// unrecognized or the encoder fails.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn convert_to_compressed(&self, filename: &str) -> CoreResult<PathBuf> {
        convert::to_compressed(&self.path_of(filename)?)
    }
}

fn write_wav(path: &Path, clip: &AudioClip) -> CoreResult<()> {
    let spec = hound::WavSpec {
        channels: clip.channels,
        sample_rate: clip.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in &clip.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(())
}
