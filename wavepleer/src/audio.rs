//! rodio-backed audio device.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use wavecore::{AudioDevice, AudioError};

pub struct RodioDevice {
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    sink: Option<Sink>,
    /// 0..=100
    volume: f32,
}

impl RodioDevice {
    /// Open the default output. Without one the player still runs, and
    /// every play attempt reports [`AudioError::Output`].
    pub fn open_default() -> Self {
        let (stream, handle) = match OutputStream::try_default() {
            Ok((stream, handle)) => (Some(stream), Some(handle)),
            Err(e) => {
                tracing::warn!(error = %e, "no audio output device");
                (None, None)
            }
        };
        Self {
            _stream: stream,
            handle,
            sink: None,
            volume: 100.0,
        }
    }
}

impl AudioDevice for RodioDevice {
    fn open_and_play(&mut self, path: &Path) -> Result<(), AudioError> {
        self.stop();

        let handle = self
            .handle
            .as_ref()
            .ok_or_else(|| AudioError::Output("no output device".into()))?;
        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let sink = Sink::try_new(handle).map_err(|e| AudioError::Output(e.to_string()))?;
        sink.set_volume(self.volume / 100.0);
        sink.append(source);
        self.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(ref sink) = self.sink {
            sink.set_volume(volume / 100.0);
        }
    }

    fn is_finished(&self) -> bool {
        self.sink.as_ref().map(|s| s.empty()).unwrap_or(false)
    }
}
