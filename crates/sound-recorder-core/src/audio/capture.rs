use crate::{
    CoreResult, RecorderError,
    audio::clip::{CHANNELS, SAMPLE_RATE},
};

use std::{
    panic::Location,
    sync::mpsc::{Receiver, TrySendError, sync_channel},
};

use cpal::{
    Device, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// Bound on the block delivery channel between the audio callback and
/// `stop()`. At typical cpal block sizes this holds well over a minute of
/// undrained audio; a full channel drops the block rather than blocking
/// the audio thread.
pub(crate) const DELIVERY_CHANNEL_CAPACITY: usize = 1024;

/// Owns the cpal input stream and the delivery channel for one capture.
///
/// Frame blocks travel over a bounded sync-channel whose sender lives in
/// the audio callback. Dropping the stream drops the sender, so draining
/// the receiver after `stop()` sees every delivered block and then
/// terminates deterministically.
pub(crate) struct AudioCapturer {
    device: Device,
    config: StreamConfig,
    stream: Option<Stream>,
    blocks_rx: Option<Receiver<Vec<i16>>>,
}

impl AudioCapturer {
    #[track_caller]
    #[instrument]
    pub(crate) fn new() -> CoreResult<Self> {
        let host = cpal::default_host();

        let device = host
            .default_input_device()
            .ok_or(RecorderError::NoMicrophoneFound {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config = StreamConfig {
            channels: CHANNELS,
            sample_rate: SAMPLE_RATE,
            buffer_size: cpal::BufferSize::Default,
        };

        info!(
            device_id = ?device.id(),
            sample_rate = SAMPLE_RATE,
            channels = CHANNELS,
            "AudioCapturer initialized"
        );

        Ok(Self {
            device,
            config,
            stream: None,
            blocks_rx: None,
        })
    }

    #[track_caller]
    #[instrument(skip(self))]
    pub(crate) fn start(&mut self) -> CoreResult<()> {
        let (blocks_tx, blocks_rx) = sync_channel::<Vec<i16>>(DELIVERY_CHANNEL_CAPACITY);

        let stream = self
            .device
            .build_input_stream(
                &self.config,
                move |data: &[i16], _: &cpal::InputCallbackInfo| {
                    // Must not block the audio thread: a full channel means
                    // the control thread is badly behind, so the block is
                    // dropped and the overrun reported.
                    match blocks_tx.try_send(data.to_vec()) {
                        Ok(()) => {}
                        Err(TrySendError::Full(block)) => {
                            warn!(dropped_samples = block.len(), "Delivery channel full, block dropped");
                        }
                        // Receiver already drained by stop(); nothing to do.
                        Err(TrySendError::Disconnected(_)) => {}
                    }
                },
                |err| {
                    error!("Audio stream error: {}", err);
                },
                None,
            )
            .map_err(|e| RecorderError::DeviceError {
                reason: format!("Failed to build stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| RecorderError::DeviceError {
            reason: format!("Failed to start stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.stream = Some(stream);
        self.blocks_rx = Some(blocks_rx);
        info!("Audio capture started");

        Ok(())
    }

    /// Close the stream and drain every delivered block, in arrival order.
    #[instrument(skip(self))]
    pub(crate) fn stop(&mut self) -> Vec<Vec<i16>> {
        if let Some(stream) = self.stream.take() {
            drop(stream);
            // Brief yield so any in-flight callback completes before the
            // drain. On most cpal backends drop() is synchronous and joins
            // the audio thread, making this redundant, but it guarantees
            // the sender is gone even if a backend's drop() returns before
            // the final callback.
            std::thread::sleep(std::time::Duration::from_millis(5));
            info!("Audio capture stopped");
        }

        let blocks = match self.blocks_rx.take() {
            Some(rx) => drain_blocks(rx),
            None => Vec::new(),
        };

        debug!(block_count = blocks.len(), "Drained delivered blocks");

        blocks
    }

    pub(crate) fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }
}

/// Drain a closed delivery channel to completion.
///
/// All senders must already be dropped, otherwise this blocks waiting for
/// more blocks. `stop()` guarantees that by dropping the stream first.
pub(crate) fn drain_blocks(rx: Receiver<Vec<i16>>) -> Vec<Vec<i16>> {
    rx.into_iter().collect()
}
