use crate::{AppCommand, AppResult, RecorderState};

use sound_recorder_core::{CaptureSession, RecordingStore, convert, playback};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Main application state.
///
/// Owns the capture session and the recording store; the command channel
/// is the surface a front-end drives. Every operation resolves to a
/// status message — failures are reported there, never propagated as
/// faults that terminate the process.
pub struct App {
    pub(crate) session: CaptureSession,
    pub(crate) store: RecordingStore,
    pub(crate) state: RecorderState,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Sound Recorder starting");
        println!("Welcome to the Sound Recorder!");
        println!(
            "Commands: record | play <file> | delete <file> | rename <file> <base> \
             | convert <file> | convert-file <path> | list | quit"
        );

        while let Some(cmd) = self.command_rx.recv().await {
            if cmd == AppCommand::Shutdown {
                info!("Shutdown requested");
                break;
            }

            let status = self.handle_command(cmd);
            println!("{status}");
        }

        info!("Sound Recorder shut down successfully");

        Ok(())
    }

    fn handle_command(&mut self, cmd: AppCommand) -> String {
        match cmd {
            AppCommand::ToggleRecording => self.toggle_recording(),
            AppCommand::Play { filename } => self.play(&filename),
            AppCommand::Delete { filename } => self.delete(&filename),
            AppCommand::Rename { old_name, new_base } => self.rename(&old_name, &new_base),
            AppCommand::Convert { filename } => self.convert(filename),
            AppCommand::ConvertFile { path } => self.convert_file(path),
            AppCommand::List => self.refresh_list(),
            // Handled by the run loop before dispatch.
            AppCommand::Shutdown => String::new(),
        }
    }

    /// Start a recording if idle, stop and persist it if recording.
    #[instrument(skip(self))]
    fn toggle_recording(&mut self) -> String {
        if let Some(session_id) = self.state.session_id() {
            let elapsed = self.state.elapsed().unwrap_or_default();
            self.state = RecorderState::Idle;
            return match self.session.stop(&self.store) {
                Ok(Some(filename)) => {
                    info!(
                        session_id = %session_id,
                        duration_ms = elapsed.as_millis(),
                        filename = %filename,
                        "Recording saved"
                    );
                    format!("Recording saved as {filename} ({:.1}s)", elapsed.as_secs_f64())
                }
                Ok(None) => "No active recording.".to_string(),
                Err(e) => {
                    error!(session_id = %session_id, error = ?e, "Failed to save recording");
                    e.to_string()
                }
            };
        }

        match self.session.start() {
            Ok(()) => {
                self.state = RecorderState::begin();
                if let Some(session_id) = self.state.session_id() {
                    info!(session_id = %session_id, "Recording started");
                }
                "Recording in progress...".to_string()
            }
            Err(e) => {
                error!(error = ?e, "Failed to start recording");
                e.to_string()
            }
        }
    }

    /// Launch detached playback of a stored recording.
    #[instrument(skip(self))]
    fn play(&self, filename: &str) -> String {
        let path = match self.store.path_of(filename) {
            Ok(p) => p,
            Err(e) => return e.to_string(),
        };

        if !path.is_file() {
            return "File not found.".to_string();
        }

        match playback::launch(&path) {
            Ok(()) => format!("Playing {filename}"),
            Err(e) => {
                error!(error = ?e, "Failed to launch playback");
                e.to_string()
            }
        }
    }

    #[instrument(skip(self))]
    fn delete(&self, filename: &str) -> String {
        match self.store.delete(filename) {
            Ok(true) => format!("{filename} deleted."),
            Ok(false) => format!("{filename} does not exist."),
            Err(e) => {
                error!(error = ?e, "Failed to delete recording");
                e.to_string()
            }
        }
    }

    /// Rename a stored recording to `<base>.wav`.
    #[instrument(skip(self))]
    fn rename(&self, old_name: &str, new_base: &str) -> String {
        let new_name = format!("{new_base}.wav");
        match self.store.rename(old_name, &new_name) {
            Ok(true) => format!("Renamed {old_name} to {new_name}"),
            Ok(false) => format!("Could not rename {old_name} to {new_name}"),
            Err(e) => {
                error!(error = ?e, "Failed to rename recording");
                e.to_string()
            }
        }
    }

    /// Convert a stored recording in the background; the result surfaces
    /// as a status line when the encoder finishes.
    #[instrument(skip(self))]
    fn convert(&self, filename: String) -> String {
        let store = self.store.clone();
        let name = filename.clone();

        tokio::task::spawn_blocking(move || match store.convert_to_compressed(&name) {
            Ok(path) => {
                info!(output = ?path, "Conversion complete");
                println!("Converted {} to {}", name, path.display());
            }
            Err(e) => {
                error!(error = ?e, "Conversion failed");
                println!("{e}");
            }
        });

        format!("Converting {filename}...")
    }

    /// Convert an arbitrary audio file outside the managed directory.
    #[instrument(skip(self))]
    fn convert_file(&self, path: std::path::PathBuf) -> String {
        let display = path.display().to_string();

        tokio::task::spawn_blocking(move || match convert::to_compressed(&path) {
            Ok(output) => {
                info!(output = ?output, "Conversion complete");
                println!("Converted {} to {}", path.display(), output.display());
            }
            Err(e) => {
                error!(error = ?e, "Conversion failed");
                println!("{e}");
            }
        });

        format!("Converting {display}...")
    }

    #[instrument(skip(self))]
    fn refresh_list(&self) -> String {
        match self.store.list() {
            Ok(names) if names.is_empty() => "No recordings.".to_string(),
            Ok(names) => names.join("\n"),
            Err(e) => {
                error!(error = ?e, "Failed to list recordings");
                e.to_string()
            }
        }
    }
}
