//! Playlist navigation and transport over an abstract audio device.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("audio output unavailable: {0}")]
    Output(String),
}

/// What the player needs from the audio backend.
pub trait AudioDevice {
    /// Replace whatever is playing with `path` and start it.
    fn open_and_play(&mut self, path: &Path) -> Result<(), AudioError>;
    fn stop(&mut self);
    /// Volume in 0..=100.
    fn set_volume(&mut self, volume: f32);
    /// Whether the last opened track has played to the end.
    fn is_finished(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Stopped,
    Playing,
}

/// Step `index` forward by one, wrapping at `len`.
pub fn wrap_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Step `index` back by one, wrapping at `len`.
pub fn wrap_previous(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

pub struct PlaybackController<D> {
    playlist: Vec<PathBuf>,
    index: Option<usize>,
    transport: Transport,
    volume: f32,
    device: D,
}

impl<D: AudioDevice> PlaybackController<D> {
    pub fn new(playlist: Vec<PathBuf>, mut device: D, volume: f32) -> Self {
        let volume = volume.clamp(0.0, 100.0);
        device.set_volume(volume);
        let index = if playlist.is_empty() { None } else { Some(0) };
        Self {
            playlist,
            index,
            transport: Transport::Stopped,
            volume,
            device,
        }
    }

    /// Restart the current track. No-op on an empty playlist.
    pub fn play(&mut self) -> bool {
        let Some(index) = self.index else {
            tracing::debug!("play ignored: playlist is empty");
            return false;
        };
        self.start(index);
        true
    }

    /// Halt playback unconditionally. Returns `false` on an empty playlist,
    /// where there was never anything to stop.
    pub fn stop(&mut self) -> bool {
        self.device.stop();
        self.transport = Transport::Stopped;
        if self.index.is_none() {
            tracing::debug!("stop on empty playlist");
            return false;
        }
        true
    }

    pub fn next(&mut self) -> bool {
        let Some(index) = self.index else {
            tracing::debug!("next ignored: playlist is empty");
            return false;
        };
        self.device.stop();
        self.start(wrap_next(index, self.playlist.len()));
        true
    }

    pub fn previous(&mut self) -> bool {
        let Some(index) = self.index else {
            tracing::debug!("previous ignored: playlist is empty");
            return false;
        };
        self.device.stop();
        self.start(wrap_previous(index, self.playlist.len()));
        true
    }

    /// Advance to the next track once the current one has drained.
    pub fn poll_finished(&mut self) -> bool {
        if self.transport == Transport::Playing && self.device.is_finished() {
            tracing::debug!("track finished, advancing");
            return self.next();
        }
        false
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 100.0);
        self.device.set_volume(self.volume);
    }

    fn start(&mut self, index: usize) {
        self.index = Some(index);
        let path = &self.playlist[index];
        match self.device.open_and_play(path) {
            Ok(()) => {
                self.transport = Transport::Playing;
                tracing::info!(track = %path.display(), index, "playing");
            }
            Err(e) => {
                self.transport = Transport::Stopped;
                tracing::error!(error = %e, "playback failed");
            }
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    pub fn current_track(&self) -> Option<&Path> {
        self.index.map(|i| self.playlist[i].as_path())
    }

    /// File name of the current track, for display.
    pub fn current_name(&self) -> Option<String> {
        self.current_track()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

}

/// Index into the cover images, moved in step with track navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverCarousel {
    len: usize,
    index: usize,
}

impl CoverCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = wrap_next(self.index, self.len);
        }
    }

    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.index = wrap_previous(self.index, self.len);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Play(PathBuf),
        Stop,
        Volume(f32),
    }

    /// Records every call; the log is shared so tests can inspect it after
    /// the device has been moved into a controller.
    #[derive(Clone, Default)]
    pub struct FakeDevice {
        pub calls: Rc<RefCell<Vec<Call>>>,
        pub finished: Rc<RefCell<bool>>,
        pub fail_open: bool,
    }

    impl FakeDevice {
        pub fn plays(&self) -> Vec<PathBuf> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|c| match c {
                    Call::Play(p) => Some(p.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn last_volume(&self) -> Option<f32> {
            self.calls.borrow().iter().rev().find_map(|c| match c {
                Call::Volume(v) => Some(*v),
                _ => None,
            })
        }
    }

    impl AudioDevice for FakeDevice {
        fn open_and_play(&mut self, path: &Path) -> Result<(), AudioError> {
            if self.fail_open {
                return Err(AudioError::Decode {
                    path: path.to_path_buf(),
                    reason: "bad frame".into(),
                });
            }
            *self.finished.borrow_mut() = false;
            self.calls.borrow_mut().push(Call::Play(path.to_path_buf()));
            Ok(())
        }

        fn stop(&mut self) {
            self.calls.borrow_mut().push(Call::Stop);
        }

        fn set_volume(&mut self, volume: f32) {
            self.calls.borrow_mut().push(Call::Volume(volume));
        }

        fn is_finished(&self) -> bool {
            *self.finished.borrow()
        }
    }

    pub fn playlist(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("/music/{i:02}.mp3"))).collect()
    }

    #[test]
    fn play_starts_current_track() {
        let dev = FakeDevice::default();
        let mut pc = PlaybackController::new(playlist(3), dev.clone(), 100.0);
        assert!(pc.play());
        assert_eq!(pc.transport(), Transport::Playing);
        assert_eq!(dev.plays(), vec![PathBuf::from("/music/00.mp3")]);

        // pressing play again restarts
        assert!(pc.play());
        assert_eq!(dev.plays().len(), 2);
    }

    #[test]
    fn next_wraps_after_full_cycle() {
        for len in 1..6 {
            let mut pc = PlaybackController::new(playlist(len), FakeDevice::default(), 100.0);
            for _ in 0..len {
                assert!(pc.next());
            }
            assert_eq!(pc.current_index(), Some(0));
        }
    }

    #[test]
    fn previous_wraps_after_full_cycle() {
        let mut pc = PlaybackController::new(playlist(4), FakeDevice::default(), 100.0);
        pc.next();
        let start = pc.current_index();
        for _ in 0..4 {
            pc.previous();
        }
        assert_eq!(pc.current_index(), start);
    }

    #[test]
    fn previous_from_first_goes_to_last() {
        let dev = FakeDevice::default();
        let mut pc = PlaybackController::new(playlist(3), dev.clone(), 100.0);
        pc.previous();
        assert_eq!(pc.current_index(), Some(2));
        assert_eq!(dev.plays(), vec![PathBuf::from("/music/02.mp3")]);
        assert_eq!(dev.calls.borrow()[1], Call::Stop);
    }

    #[test]
    fn stop_is_unconditional() {
        let dev = FakeDevice::default();
        let mut pc = PlaybackController::new(playlist(2), dev.clone(), 100.0);
        assert!(pc.stop());
        assert!(pc.stop());
        assert_eq!(pc.transport(), Transport::Stopped);
        assert_eq!(dev.calls.borrow().last(), Some(&Call::Stop));
    }

    #[test]
    fn empty_playlist_is_inert() {
        let dev = FakeDevice::default();
        let mut pc = PlaybackController::new(Vec::new(), dev.clone(), 100.0);
        assert!(!pc.play());
        assert!(!pc.next());
        assert!(!pc.previous());
        assert!(!pc.stop());
        assert_eq!(pc.transport(), Transport::Stopped);
        assert_eq!(pc.current_index(), None);
        assert_eq!(pc.current_name(), None);
        assert!(dev.plays().is_empty());
    }

    #[test]
    fn open_failure_leaves_transport_stopped() {
        let dev = FakeDevice { fail_open: true, ..Default::default() };
        let mut pc = PlaybackController::new(playlist(2), dev, 100.0);
        assert!(pc.next());
        assert_eq!(pc.current_index(), Some(1));
        assert_eq!(pc.transport(), Transport::Stopped);
    }

    #[test]
    fn volume_is_clamped_and_forwarded() {
        let dev = FakeDevice::default();
        let mut pc = PlaybackController::new(playlist(1), dev.clone(), 250.0);
        assert_eq!(pc.volume(), 100.0);
        pc.set_volume(-3.0);
        assert_eq!(dev.last_volume(), Some(0.0));
    }

    #[test]
    fn finished_track_advances_only_while_playing() {
        let dev = FakeDevice::default();
        let mut pc = PlaybackController::new(playlist(2), dev.clone(), 100.0);
        *dev.finished.borrow_mut() = true;
        assert!(!pc.poll_finished());

        pc.play();
        *dev.finished.borrow_mut() = true;
        assert!(pc.poll_finished());
        assert_eq!(pc.current_index(), Some(1));
    }

    #[test]
    fn current_name_is_file_name() {
        let pc = PlaybackController::new(playlist(2), FakeDevice::default(), 100.0);
        assert_eq!(pc.current_name().as_deref(), Some("00.mp3"));
    }

    #[test]
    fn carousel_wraps_and_ignores_empty() {
        let mut c = CoverCarousel::new(3);
        c.retreat();
        assert_eq!(c.current(), Some(2));
        c.advance();
        c.advance();
        assert_eq!(c.current(), Some(1));

        let mut empty = CoverCarousel::new(0);
        empty.advance();
        empty.retreat();
        assert_eq!(empty.current(), None);
    }
}
