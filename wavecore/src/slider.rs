//! Volume slider: a round indicator dragged along a horizontal track.

use egui::{pos2, Pos2, Rect};

/// Radius of the round indicator.
pub const INDICATOR_RADIUS: f32 = 10.0;

/// Maximum volume, reached at the right end of the track.
pub const MAX_VOLUME: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderState {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSlider {
    origin: Pos2,
    width: f32,
    state: SliderState,
}

impl VolumeSlider {
    pub fn new(origin: Pos2, width: f32) -> Self {
        Self {
            origin,
            width,
            state: SliderState::Idle,
        }
    }

    pub fn set_geometry(&mut self, origin: Pos2, width: f32) {
        self.origin = origin;
        self.width = width;
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == SliderState::Dragging
    }

    /// Centre of the indicator for the given volume.
    pub fn indicator_center(&self, volume: f32) -> Pos2 {
        let x = self.width * (volume / MAX_VOLUME).clamp(0.0, 1.0);
        pos2(self.origin.x + x, self.origin.y)
    }

    /// Bounding box of the indicator circle.
    pub fn indicator_rect(&self, volume: f32) -> Rect {
        Rect::from_center_size(
            self.indicator_center(volume),
            egui::vec2(INDICATOR_RADIUS * 2.0, INDICATOR_RADIUS * 2.0),
        )
    }

    /// Pointer pressed. Starts a drag only when `pos` is on the indicator.
    pub fn press(&mut self, pos: Pos2, volume: f32) -> bool {
        if self.indicator_rect(volume).contains(pos) {
            self.state = SliderState::Dragging;
            true
        } else {
            false
        }
    }

    /// Pointer released anywhere.
    pub fn release(&mut self) {
        self.state = SliderState::Idle;
    }

    /// Pointer moved. Returns the new volume while dragging.
    pub fn drag_to(&self, pointer_x: f32) -> Option<f32> {
        if !self.is_dragging() {
            return None;
        }
        Some(volume_at(pointer_x - self.origin.x, self.width))
    }
}

/// Map an offset along a track of `width` to 0..=100, clamped at both ends.
pub fn volume_at(offset: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    let x = offset.clamp(0.0, width);
    MAX_VOLUME * x / width
}
