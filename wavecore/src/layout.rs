//! Window layout: a centred row of control buttons near the bottom edge,
//! with the volume slider, track label and cover art stacked above it.

use egui::{pos2, vec2, Pos2, Rect, Vec2};

/// Vertical distance from the button row to the volume slider.
pub const SLIDER_OFFSET: f32 = 30.0;
/// Thickness of the slider track.
pub const SLIDER_HEIGHT: f32 = 5.0;
/// Vertical distance from the button row to the track label.
pub const LABEL_OFFSET: f32 = 100.0;
/// Cover art is always drawn at this size.
pub const COVER_SIZE: Vec2 = vec2(420.0, 420.0);
/// Gap between the bottom of the cover and the slider.
pub const COVER_GAP: f32 = 120.0;

/// Fixed button metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    pub button_size: f32,
    pub spacing: f32,
    pub margin_bottom: f32,
}

impl Default for ButtonLayout {
    fn default() -> Self {
        Self {
            button_size: 64.0,
            spacing: 54.0,
            margin_bottom: 100.0,
        }
    }
}

impl ButtonLayout {
    /// Width of a block of `count` buttons, spacing between them only.
    pub fn block_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        count as f32 * (self.button_size + self.spacing) - self.spacing
    }

    /// Top-left corner of each of `count` buttons, centred horizontally.
    pub fn positions(&self, window: Vec2, count: usize) -> Vec<Pos2> {
        let start_x = (window.x - self.block_width(count)) / 2.0;
        let y = window.y - self.margin_bottom - self.button_size;
        (0..count)
            .map(|i| pos2(start_x + i as f32 * (self.button_size + self.spacing), y))
            .collect()
    }

    /// Full geometry of the scene for a window of the given size.
    pub fn scene(&self, window: Vec2, count: usize) -> Scene {
        let size = vec2(self.button_size, self.button_size);
        let buttons: Vec<Rect> = self
            .positions(window, count)
            .into_iter()
            .map(|p| Rect::from_min_size(p, size))
            .collect();

        let first = buttons
            .first()
            .map(|r| r.min)
            .unwrap_or_else(|| pos2(window.x / 2.0, window.y - self.margin_bottom - self.button_size));

        let slider_origin = pos2(first.x, first.y - SLIDER_OFFSET);
        let slider_width = self.block_width(count);
        let cover = Rect::from_min_size(
            pos2(
                (window.x - COVER_SIZE.x) / 2.0,
                slider_origin.y - COVER_GAP - COVER_SIZE.y,
            ),
            COVER_SIZE,
        );

        Scene {
            window,
            buttons,
            slider_origin,
            slider_width,
            label_y: first.y - LABEL_OFFSET,
            cover,
        }
    }
}

/// Computed positions for everything drawn in the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub window: Vec2,
    pub buttons: Vec<Rect>,
    pub slider_origin: Pos2,
    pub slider_width: f32,
    pub label_y: f32,
    pub cover: Rect,
}

impl Scene {
    pub fn slider_rect(&self) -> Rect {
        Rect::from_min_size(self.slider_origin, vec2(self.slider_width, SLIDER_HEIGHT))
    }

    pub fn center_x(&self) -> f32 {
        self.window.x / 2.0
    }
}
