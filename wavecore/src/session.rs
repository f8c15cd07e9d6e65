//! Per-window interaction state.
//!
//! A [`Session`] is owned by the main loop. Each frame the loop feeds it
//! the input events it received, then calls [`Session::tick`] to advance
//! the time-based animations, then draws from its accessors.

use crate::animation::FadeController;
use crate::controls::{Control, ControlBar};
use crate::favorites::Favorites;
use crate::layout::{ButtonLayout, Scene};
use crate::marquee::Marquee;
use crate::playback::{AudioDevice, CoverCarousel, PlaybackController};
use crate::slider::VolumeSlider;
use egui::{Pos2, Vec2};
use std::time::Instant;

/// Input the session understands, already translated from window events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(Pos2),
    PointerUp,
    PointerMoved(Pos2),
    ToggleFavorites,
    CloseOverlay,
}

/// Tunables fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub layout: ButtonLayout,
    pub fade: std::time::Duration,
    pub marquee_step: f32,
    pub auto_advance: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            layout: ButtonLayout::default(),
            fade: crate::animation::FADE_DURATION,
            marquee_step: crate::marquee::MARQUEE_STEP,
            auto_advance: false,
        }
    }
}

pub struct Session<D> {
    playback: PlaybackController<D>,
    favorites: Favorites,
    covers: CoverCarousel,
    layout: ButtonLayout,
    scene: Scene,
    controls: ControlBar,
    fade: FadeController,
    slider: VolumeSlider,
    marquee: Marquee,
    favorites_open: bool,
    auto_advance: bool,
}

impl<D: AudioDevice> Session<D> {
    pub fn new(
        playback: PlaybackController<D>,
        favorites: Favorites,
        cover_count: usize,
        window: Vec2,
        options: SessionOptions,
    ) -> Self {
        let scene = options.layout.scene(window, Control::ALL.len());
        Self {
            playback,
            favorites,
            covers: CoverCarousel::new(cover_count),
            layout: options.layout,
            controls: ControlBar::new(&scene.buttons),
            slider: VolumeSlider::new(scene.slider_origin, scene.slider_width),
            scene,
            fade: FadeController::new(options.fade),
            marquee: Marquee::new(options.marquee_step),
            favorites_open: false,
            auto_advance: options.auto_advance,
        }
    }

    /// Recompute positions when the window size changed.
    pub fn relayout(&mut self, window: Vec2) {
        if window == self.scene.window {
            return;
        }
        self.scene = self.layout.scene(window, Control::ALL.len());
        self.controls.relayout(&self.scene.buttons);
        self.slider.set_geometry(self.scene.slider_origin, self.scene.slider_width);
        tracing::debug!(width = window.x, height = window.y, "relayout");
    }

    pub fn handle(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::PointerDown(pos) => {
                if self.favorites_open {
                    return;
                }
                if let Some(control) = self.controls.hit_test(pos) {
                    self.press(control, now);
                }
                self.slider.press(pos, self.playback.volume());
            }
            InputEvent::PointerUp => self.slider.release(),
            InputEvent::PointerMoved(pos) => {
                if let Some(volume) = self.slider.drag_to(pos.x) {
                    self.playback.set_volume(volume);
                }
            }
            InputEvent::ToggleFavorites => {
                self.favorites_open = !self.favorites_open;
                tracing::debug!(open = self.favorites_open, "favorites overlay toggled");
            }
            InputEvent::CloseOverlay => self.favorites_open = false,
        }
    }

    /// Run `control` and highlight it if anything happened.
    pub fn press(&mut self, control: Control, now: Instant) {
        let ran = match control {
            Control::Play => self.playback.play(),
            Control::Stop => self.playback.stop(),
            Control::Next => {
                let ran = self.playback.next();
                if ran {
                    self.covers.advance();
                }
                ran
            }
            Control::Previous => {
                let ran = self.playback.previous();
                if ran {
                    self.covers.retreat();
                }
                ran
            }
            Control::Favorite => self.add_current_to_favorites(),
        };
        if ran {
            self.fade.activate(control, now, self.controls.buttons_mut());
        }
    }

    fn add_current_to_favorites(&mut self) -> bool {
        let Some(track) = self.playback.current_track() else {
            tracing::debug!("favorite ignored: playlist is empty");
            return false;
        };
        // Entries are UTF-8 lines; a lossy copy could never match the file again.
        let Some(track) = track.to_str() else {
            tracing::warn!(track = %track.display(), "favorite skipped: path is not valid UTF-8");
            return false;
        };
        if let Err(e) = self.favorites.add_and_persist(track) {
            tracing::error!(error = %e, path = %self.favorites.path().display(), "could not save favorites");
        }
        true
    }

    /// Advance fade and marquee for one frame. `text_width` is the width of
    /// the current track label.
    pub fn tick(&mut self, now: Instant, text_width: f32) {
        self.fade.update(now, self.controls.buttons_mut());
        if self.favorites_open {
            return;
        }
        if self.playback.current_index().is_some() {
            self.marquee.advance(text_width);
        }
        if self.auto_advance && self.playback.poll_finished() {
            self.covers.advance();
        }
    }

    pub fn playback(&self) -> &PlaybackController<D> {
        &self.playback
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn favorites_open(&self) -> bool {
        self.favorites_open
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn controls(&self) -> &ControlBar {
        &self.controls
    }

    pub fn slider(&self) -> &VolumeSlider {
        &self.slider
    }

    pub fn marquee(&self) -> &Marquee {
        &self.marquee
    }

    pub fn fade(&self) -> &FadeController {
        &self.fade
    }

    pub fn cover_index(&self) -> Option<usize> {
        self.covers.current()
    }

    /// Whether anything is animating and the window should keep repainting.
    pub fn is_animating(&self) -> bool {
        self.fade.is_fading() || self.playback.current_index().is_some()
    }
}
