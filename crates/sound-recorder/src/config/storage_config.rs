use crate::config::default_recordings_dir;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Recording storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Managed directory holding the persisted recordings.
    #[serde(default = "default_recordings_dir")]
    pub recordings_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            recordings_dir: default_recordings_dir(),
        }
    }
}
