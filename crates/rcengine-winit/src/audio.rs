//! Default audio output device, opened at startup and held until close.

use rcengine_core::{AudioSpec, EngineError};
use rodio::{OutputStream, OutputStreamHandle};

pub(crate) struct AudioDevice {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
}

impl AudioDevice {
    /// Open the default output device.
    ///
    /// The device runs at its own native format; `spec` is recorded for
    /// diagnostics only.
    pub fn open(spec: &AudioSpec) -> Result<Self, EngineError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| EngineError::Audio(e.to_string()))?;
        log::debug!(
            "audio device open (requested {} Hz, {} ch, {} frames)",
            spec.sample_rate,
            spec.channels,
            spec.buffer_size,
        );
        Ok(Self {
            _stream: stream,
            _handle: handle,
        })
    }
}
