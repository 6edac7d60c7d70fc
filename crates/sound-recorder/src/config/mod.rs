#[allow(clippy::module_inception)]
mod config;
mod storage_config;

pub(crate) use {config::Config, storage_config::StorageConfig};

use std::path::PathBuf;

/// Managed directory for recordings, relative to the working directory.
pub(crate) const DEFAULT_RECORDINGS_DIR: &str = "recordings";

pub(crate) fn default_recordings_dir() -> PathBuf {
    PathBuf::from(DEFAULT_RECORDINGS_DIR)
}
