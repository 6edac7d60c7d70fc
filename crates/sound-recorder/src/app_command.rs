use std::path::PathBuf;

/// Commands sent from the input driver to the main application.
///
/// Each variant maps 1:1 to a core operation; the driver line syntax is
/// the seam where a graphical front-end would attach instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Start recording if idle, stop and save if recording.
    ToggleRecording,
    /// Launch detached playback of a stored recording.
    Play {
        /// Recording name within the managed directory.
        filename: String,
    },
    /// Delete a stored recording.
    Delete {
        /// Recording name within the managed directory.
        filename: String,
    },
    /// Rename a stored recording to `<base>.wav`.
    Rename {
        /// Existing recording name.
        old_name: String,
        /// New base name; the `.wav` extension is appended.
        new_base: String,
    },
    /// Convert a stored recording to the compressed format.
    Convert {
        /// Recording name within the managed directory.
        filename: String,
    },
    /// Convert an arbitrary audio file outside the managed directory.
    ConvertFile {
        /// Path to the input file.
        path: PathBuf,
    },
    /// Refresh and show the recordings listing.
    List,
    /// Request application shutdown.
    Shutdown,
}

impl AppCommand {
    /// Parse one driver input line.
    ///
    /// Returns a usage message for unknown or malformed input; the caller
    /// surfaces it as a status line rather than an error.
    pub(crate) fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();

        match words.next() {
            Some("record") => Ok(Self::ToggleRecording),
            Some("play") => match words.next() {
                Some(name) => Ok(Self::Play {
                    filename: name.to_string(),
                }),
                None => Err("Usage: play <filename>".to_string()),
            },
            Some("delete") => match words.next() {
                Some(name) => Ok(Self::Delete {
                    filename: name.to_string(),
                }),
                None => Err("Usage: delete <filename>".to_string()),
            },
            Some("rename") => match (words.next(), words.next()) {
                (Some(old), Some(base)) => Ok(Self::Rename {
                    old_name: old.to_string(),
                    new_base: base.to_string(),
                }),
                _ => Err("Usage: rename <filename> <new-base-name>".to_string()),
            },
            Some("convert") => match words.next() {
                Some(name) => Ok(Self::Convert {
                    filename: name.to_string(),
                }),
                None => Err("Usage: convert <filename>".to_string()),
            },
            Some("convert-file") => match words.next() {
                Some(path) => Ok(Self::ConvertFile {
                    path: PathBuf::from(path),
                }),
                None => Err("Usage: convert-file <path>".to_string()),
            },
            Some("list") => Ok(Self::List),
            Some("quit") | Some("exit") => Ok(Self::Shutdown),
            Some(other) => Err(format!("Unknown command: {other}")),
            None => Err("Empty command".to_string()),
        }
    }
}
