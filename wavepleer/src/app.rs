//! WavePleer - image-button audio player with cover art and favorites

use crate::assets::Assets;
use crate::audio::RodioDevice;
use egui::{Context, Event, FontFamily, FontId, Key, PointerButton, TextureHandle, TextureOptions};
use std::time::Instant;
use wavecore::theme::{track_font, WaveColors};
use wavecore::{widgets, Control, InputEvent, RepaintController, Session, WaveTheme};

pub struct WavePleerApp {
    session: Session<RodioDevice>,
    icons: Vec<(Control, TextureHandle)>,
    covers: Vec<TextureHandle>,
    background: Option<TextureHandle>,
    theme: WaveTheme,
    repaint: RepaintController,
}

impl WavePleerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, session: Session<RodioDevice>, assets: Assets) -> Self {
        let ctx = &cc.egui_ctx;
        let theme = WaveTheme::default();
        theme.apply(ctx, assets.font);

        let icons = assets
            .icons
            .into_iter()
            .map(|(control, image)| {
                let name = format!("icon_{}", control.icon_name());
                (control, ctx.load_texture(name, image, TextureOptions::LINEAR))
            })
            .collect();
        let covers = assets
            .covers
            .into_iter()
            .enumerate()
            .map(|(i, image)| ctx.load_texture(format!("cover_{i}"), image, TextureOptions::LINEAR))
            .collect();
        let background = assets
            .background
            .map(|image| ctx.load_texture("background", image, TextureOptions::LINEAR));

        Self {
            session,
            icons,
            covers,
            background,
            theme,
            repaint: RepaintController::new(),
        }
    }

    fn track_font(&self) -> FontId {
        track_font(self.theme.font_size_track)
    }

    fn paint(&self, painter: &egui::Painter, screen: egui::Rect, track_name: Option<&str>) {
        let scene = self.session.scene();

        if let Some(ref bg) = self.background {
            widgets::paint_image(painter, bg.id(), screen);
        }

        for button in self.session.controls().buttons() {
            if let Some((_, tex)) = self.icons.iter().find(|(c, _)| *c == button.control) {
                widgets::paint_icon(painter, tex.id(), button.rect, button.alpha);
            }
        }

        if let Some(name) = track_name {
            let x = self.session.marquee().x(scene.center_x());
            widgets::paint_label(painter, x, scene.label_y, name, self.track_font());
        }

        widgets::paint_slider(painter, scene, self.session.slider(), self.session.playback().volume());

        if let Some(tex) = self.session.cover_index().and_then(|i| self.covers.get(i)) {
            widgets::paint_image(painter, tex.id(), scene.cover);
        }

        if self.session.favorites_open() {
            widgets::paint_favorites(
                painter,
                screen,
                self.session.favorites().iter(),
                FontId::new(self.theme.font_size_heading, FontFamily::Proportional),
                FontId::new(self.theme.font_size_body, FontFamily::Proportional),
            );
        }
    }
}

/// Translate a window event into player input. Only the primary button counts.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            ..
        } => Some(InputEvent::PointerDown(*pos)),
        Event::PointerButton {
            button: PointerButton::Primary,
            pressed: false,
            ..
        } => Some(InputEvent::PointerUp),
        Event::PointerMoved(pos) => Some(InputEvent::PointerMoved(*pos)),
        Event::Key {
            key: Key::F,
            pressed: true,
            repeat: false,
            ..
        } => Some(InputEvent::ToggleFavorites),
        Event::Key {
            key: Key::Escape,
            pressed: true,
            ..
        } => Some(InputEvent::CloseOverlay),
        _ => None,
    }
}

impl eframe::App for WavePleerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let screen = ctx.screen_rect();

        self.session.relayout(screen.size());

        let events: Vec<InputEvent> = ctx.input(|i| i.events.iter().filter_map(translate).collect());
        for event in events {
            self.session.handle(event, now);
        }

        let track_name = self.session.playback().current_name();
        let text_width = track_name
            .as_ref()
            .map(|name| {
                let font = self.track_font();
                ctx.fonts(|f| f.layout_no_wrap(name.clone(), font, WaveColors::BLACK).size().x)
            })
            .unwrap_or(0.0);
        self.session.tick(now, text_width);

        egui::CentralPanel::default()
            .frame(WaveTheme::canvas_frame())
            .show(ctx, |ui| {
                self.paint(ui.painter(), screen, track_name.as_deref());
            });

        self.repaint.set_continuous(self.session.is_animating());
        self.repaint.end_frame(ctx);
    }
}
