//! wavecore: interaction core for the WavePleer audio player

pub mod animation;
pub mod controls;
pub mod favorites;
pub mod layout;
pub mod marquee;
pub mod playback;
pub mod repaint;
pub mod session;
pub mod slider;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use controls::Control;
pub use favorites::Favorites;
pub use playback::{AudioDevice, AudioError, PlaybackController};
pub use repaint::RepaintController;
pub use session::{InputEvent, Session, SessionOptions};
pub use theme::WaveTheme;
