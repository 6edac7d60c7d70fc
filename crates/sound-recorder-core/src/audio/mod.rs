pub(crate) mod capture;
mod clip;
mod session;

pub use {
    clip::{AudioClip, CHANNELS, SAMPLE_RATE},
    session::{CaptureSession, SessionState},
};
