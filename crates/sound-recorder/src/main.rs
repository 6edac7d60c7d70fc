//! Sound Recorder: microphone capture with a line-driven control surface.

mod app;
mod app_command;
mod config;
mod error;
mod input_forwarder;
mod recorder_state;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    recorder_state::RecorderState,
};

use crate::config::Config;

use sound_recorder_core::{CaptureSession, RecordingStore};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Open the managed recording store at the configured directory.
fn open_store(config: &Config) -> AppResult<RecordingStore> {
    let store = RecordingStore::open(&config.storage.recordings_dir)?;
    Ok(store)
}

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("sound_recorder=debug")
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let store = match open_store(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to open recording store: {:?}", e);
            std::process::exit(1);
        }
    };

    let session = CaptureSession::new();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let (command_tx, command_rx) = mpsc::channel(32);

        // Input forwarding via single persistent blocking task — the seam
        // where a graphical front-end would attach instead of stdin.
        //
        // Shutdown: when command_rx is dropped (run loop breaks),
        // blocking_send() fails, breaking the forwarder loop.
        let input_handle = tokio::task::spawn_blocking(move || {
            input_forwarder::run(std::io::stdin().lock(), &command_tx);
        });

        let app = App {
            session,
            store,
            state: RecorderState::Idle,
            command_rx,
        };

        if let Err(e) = app.run().await {
            error!(error = ?e, "App error");
        }

        match tokio::time::timeout(std::time::Duration::from_secs(1), input_handle).await {
            Ok(Ok(())) => info!("Input forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Input forwarder task panicked"),
            Err(_) => {
                // The forwarder is parked in read_line until the next input
                // line arrives; dropping the runtime would wait on it and
                // hang shutdown, so leave the process instead.
                info!("Input forwarder still blocked on stdin, exiting");
                std::process::exit(0);
            }
        }
    });
}
