//! Painting helpers for the player window.

use crate::layout::Scene;
use crate::slider::{VolumeSlider, INDICATOR_RADIUS};
use crate::theme::WaveColors;
use egui::{pos2, Align2, Color32, FontId, Painter, Rect, TextureId};

fn full_uv() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0))
}

/// Draw a texture stretched over `rect`.
pub fn paint_image(painter: &Painter, texture: TextureId, rect: Rect) {
    painter.image(texture, rect, full_uv(), Color32::WHITE);
}

/// Draw a button icon with the given alpha.
pub fn paint_icon(painter: &Painter, texture: TextureId, rect: Rect, alpha: u8) {
    painter.image(
        texture,
        rect,
        full_uv(),
        Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
    );
}

/// Slider track and round indicator for `volume`.
pub fn paint_slider(painter: &Painter, scene: &Scene, slider: &VolumeSlider, volume: f32) {
    painter.rect_filled(scene.slider_rect(), 0.0, WaveColors::BLACK);
    painter.circle_filled(slider.indicator_center(volume), INDICATOR_RADIUS, WaveColors::BLACK);
}

/// Track label at `x`, vertically at the scene's label line. Returns the drawn rect.
pub fn paint_label(painter: &Painter, x: f32, y: f32, text: &str, font: FontId) -> Rect {
    painter.text(pos2(x, y), Align2::LEFT_TOP, text, font, WaveColors::BLACK)
}

/// Modal favorites screen covering the whole window.
pub fn paint_favorites<'a>(
    painter: &Painter,
    screen: Rect,
    entries: impl Iterator<Item = &'a str>,
    heading: FontId,
    body: FontId,
) {
    painter.rect_filled(screen, 0.0, WaveColors::WHITE);

    let margin = 20.0;
    let mut y = screen.min.y + margin;
    let title = painter.text(
        pos2(screen.min.x + margin, y),
        Align2::LEFT_TOP,
        "favorites",
        heading,
        WaveColors::BLACK,
    );
    y = title.max.y + margin / 2.0;

    let line_height = body.size * 1.4;
    let mut any = false;
    for entry in entries {
        if y + line_height > screen.max.y - margin * 2.0 {
            break;
        }
        painter.text(
            pos2(screen.min.x + margin, y),
            Align2::LEFT_TOP,
            entry,
            body.clone(),
            WaveColors::BLACK,
        );
        y += line_height;
        any = true;
    }
    if !any {
        painter.text(
            pos2(screen.min.x + margin, y),
            Align2::LEFT_TOP,
            "no favorites yet",
            body.clone(),
            WaveColors::BLACK,
        );
    }

    painter.text(
        pos2(screen.center().x, screen.max.y - margin),
        Align2::CENTER_BOTTOM,
        "press esc to go back",
        body,
        WaveColors::BLACK,
    );
}
