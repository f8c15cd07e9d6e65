//! WavePleer theme
//!
//! Black on white. The track label uses a font loaded from the assets
//! directory at startup; everything else keeps egui's default fonts.

use egui::{Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct WaveColors;

impl WaveColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Name of the font family registered for the track label.
pub const TRACK_FAMILY: &str = "track";

/// Font used for the scrolling track label.
pub fn track_font(size: f32) -> FontId {
    FontId::new(size, FontFamily::Name(TRACK_FAMILY.into()))
}

pub struct WaveTheme {
    pub font_size_body: f32,
    pub font_size_track: f32,
    pub font_size_heading: f32,
    pub item_spacing: f32,
}

impl Default for WaveTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_track: 20.0,
            font_size_heading: 22.0,
            item_spacing: 4.0,
        }
    }
}

impl WaveTheme {
    /// Install fonts and visuals. `track_font` is the raw TTF/OTF data for the label.
    pub fn apply(&self, ctx: &egui::Context, track_font: Vec<u8>) {
        let mut fonts = FontDefinitions::default();
        fonts
            .font_data
            .insert(TRACK_FAMILY.to_owned(), FontData::from_owned(track_font));

        // the label font first, default proportional fonts as glyph fallback
        let mut family = vec![TRACK_FAMILY.to_owned()];
        if let Some(fallback) = fonts.families.get(&FontFamily::Proportional) {
            family.extend(fallback.iter().cloned());
        }
        fonts.families.insert(FontFamily::Name(TRACK_FAMILY.into()), family);
        ctx.set_fonts(fonts);

        let mut style = Style::default();
        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body - 3.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = WaveColors::WHITE;
        visuals.panel_fill = WaveColors::WHITE;
        visuals.extreme_bg_color = WaveColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, WaveColors::BLACK);
        visuals.override_text_color = Some(WaveColors::BLACK);
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);

        ctx.set_style(style);
    }

    /// Central panel frame: plain white, no margin, so scene coordinates
    /// are window coordinates.
    pub fn canvas_frame() -> egui::Frame {
        egui::Frame::none().fill(WaveColors::WHITE)
    }
}
