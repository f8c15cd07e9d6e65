//! Settings read once at startup.
//!
//! File format: JSON, default path `<config dir>/wavepleer/settings.json`.
//! Every section has defaults, so a missing file or a partial one is fine.
//! Command-line flags override the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wavecore::animation::FADE_DURATION;
use wavecore::layout::ButtonLayout;
use wavecore::storage::{self, StorageError};
use wavecore::SessionOptions;

pub const APP_NAME: &str = "wavepleer";

/// Longest accepted fade, in seconds.
pub const MAX_FADE_SECS: f32 = 60.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub window: WindowSettings,
    pub layout: LayoutSettings,
    pub animation: AnimationSettings,
    pub playback: PlaybackSettings,
    /// Button icons, label font and optional background.
    pub assets_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            window: WindowSettings::default(),
            layout: LayoutSettings::default(),
            animation: AnimationSettings::default(),
            playback: PlaybackSettings::default(),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LibrarySettings {
    pub music_dir: PathBuf,
    /// Defaults to `<assets_dir>/covers`.
    pub covers_dir: Option<PathBuf>,
    /// Defaults to `favorites.txt` in the config directory.
    pub favorites_path: Option<PathBuf>,
    pub extension: String,
    pub cover_extension: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_dir: storage::music_dir(),
            covers_dir: None,
            favorites_path: None,
            extension: "mp3".into(),
            cover_extension: "png".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 800.0,
            title: "Audio Player".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    pub button_size: f32,
    pub button_spacing: f32,
    pub margin_bottom: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        let layout = ButtonLayout::default();
        Self {
            button_size: layout.button_size,
            button_spacing: layout.spacing,
            margin_bottom: layout.margin_bottom,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationSettings {
    pub fade_secs: f32,
    /// Marquee advance per frame, in pixels.
    pub marquee_step: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            fade_secs: FADE_DURATION.as_secs_f32(),
            marquee_step: wavecore::marquee::MARQUEE_STEP,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaybackSettings {
    /// 0..=100
    pub initial_volume: f32,
    /// Move to the next track when one finishes.
    pub auto_advance: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: 100.0,
            auto_advance: false,
        }
    }
}

impl Settings {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file gives the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, StorageError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(default_settings_path);
        match storage::load_json::<Settings>(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                Ok(settings)
            }
            Err(StorageError::NotFound(_)) => {
                tracing::info!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, music_dir: Option<PathBuf>, assets_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = music_dir {
            self.library.music_dir = dir;
        }
        if let Some(dir) = assets_dir {
            self.assets_dir = dir;
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        if !positive(self.window.width) || !positive(self.window.height) {
            return Err("window.width and window.height must be finite and > 0".to_string());
        }
        if !positive(self.layout.button_size) {
            return Err("layout.button_size must be finite and > 0".to_string());
        }
        if !non_negative(self.layout.button_spacing) || !non_negative(self.layout.margin_bottom) {
            return Err("layout.button_spacing and layout.margin_bottom must be finite and >= 0".to_string());
        }
        let fade = self.animation.fade_secs;
        if !positive(fade) || fade > MAX_FADE_SECS || Duration::try_from_secs_f32(fade).is_err() {
            return Err(format!("animation.fade_secs must be within (0, {MAX_FADE_SECS}]"));
        }
        if !positive(self.animation.marquee_step) {
            return Err("animation.marquee_step must be finite and > 0".to_string());
        }
        if !(0.0..=100.0).contains(&self.playback.initial_volume) {
            return Err("playback.initial_volume must be within 0..=100".to_string());
        }
        Ok(())
    }

    pub fn covers_dir(&self) -> PathBuf {
        self.library
            .covers_dir
            .clone()
            .unwrap_or_else(|| self.assets_dir.join("covers"))
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.library
            .favorites_path
            .clone()
            .unwrap_or_else(|| storage::config_dir(APP_NAME).join("favorites.txt"))
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            layout: ButtonLayout {
                button_size: self.layout.button_size,
                spacing: self.layout.button_spacing,
                margin_bottom: self.layout.margin_bottom,
            },
            fade: Duration::try_from_secs_f32(self.animation.fade_secs).unwrap_or(FADE_DURATION),
            marquee_step: self.animation.marquee_step,
            auto_advance: self.playback.auto_advance,
        }
    }
}

pub fn default_settings_path() -> PathBuf {
    storage::config_dir(APP_NAME).join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_window() {
        let s = Settings::default();
        assert_eq!(s.window.width, 600.0);
        assert_eq!(s.window.height, 800.0);
        assert_eq!(s.library.extension, "mp3");
        assert_eq!(s.library.cover_extension, "png");
        assert_eq!(s.playback.initial_volume, 100.0);
        assert!(!s.playback.auto_advance);
        assert!(s.validate().is_ok());

        let opts = s.session_options();
        assert_eq!(opts.layout, ButtonLayout::default());
        assert_eq!(opts.fade, Duration::from_millis(250));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(Some(&dir.path().join("settings.json"))).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "library": { "music_dir": "/srv/music" }, "playback": { "auto_advance": true } }"#,
        )
        .unwrap();

        let s = Settings::load(Some(&path)).unwrap();
        assert_eq!(s.library.music_dir, PathBuf::from("/srv/music"));
        assert_eq!(s.library.extension, "mp3");
        assert!(s.playback.auto_advance);
        assert_eq!(s.playback.initial_volume, 100.0);
        assert_eq!(s.window, WindowSettings::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Settings::load(Some(&path)), Err(StorageError::Json(_))));
    }

    #[test]
    fn overrides_win() {
        let s = Settings::default().with_overrides(Some("/a".into()), Some("/b".into()));
        assert_eq!(s.library.music_dir, PathBuf::from("/a"));
        assert_eq!(s.assets_dir, PathBuf::from("/b"));
        assert_eq!(s.covers_dir(), PathBuf::from("/b/covers"));
    }

    #[test]
    fn explicit_paths_are_used() {
        let mut s = Settings::default();
        s.library.covers_dir = Some("/art".into());
        s.library.favorites_path = Some("/tmp/favs.txt".into());
        assert_eq!(s.covers_dir(), PathBuf::from("/art"));
        assert_eq!(s.favorites_path(), PathBuf::from("/tmp/favs.txt"));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut s = Settings::default();
        s.layout.button_size = 0.0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.animation.fade_secs = 0.0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.playback.initial_volume = 140.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn validation_rejects_non_finite_and_huge_values() {
        fn reject(edit: impl FnOnce(&mut Settings)) {
            let mut s = Settings::default();
            edit(&mut s);
            assert!(s.validate().is_err());
        }
        reject(|s| s.animation.fade_secs = 1e30);
        reject(|s| s.animation.fade_secs = f32::NAN);
        reject(|s| s.animation.fade_secs = f32::INFINITY);
        reject(|s| s.animation.marquee_step = 0.0);
        reject(|s| s.animation.marquee_step = -1.0);
        reject(|s| s.animation.marquee_step = f32::NAN);
        reject(|s| s.window.width = f32::NAN);
        reject(|s| s.window.height = f32::INFINITY);
        reject(|s| s.layout.button_size = f32::NAN);
        reject(|s| s.layout.button_spacing = f32::NAN);
        reject(|s| s.playback.initial_volume = f32::NAN);

        let mut s = Settings::default();
        s.animation.fade_secs = MAX_FADE_SECS;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn huge_fade_from_file_is_rejected_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "animation": { "fade_secs": 1e30 } }"#).unwrap();

        let s = Settings::load(Some(&path)).unwrap();
        assert!(s.validate().is_err());
        assert_eq!(s.session_options().fade, FADE_DURATION);
    }
}
