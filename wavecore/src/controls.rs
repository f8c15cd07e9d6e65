//! Transport controls and their on-screen buttons.

use egui::{Pos2, Rect};

/// Alpha of a fully visible button.
pub const OPAQUE: u8 = 255;

/// Every clickable control, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Play,
    Stop,
    Previous,
    Next,
    Favorite,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Play,
        Control::Stop,
        Control::Previous,
        Control::Next,
        Control::Favorite,
    ];

    /// File stem of the icon drawn for this control.
    pub fn icon_name(&self) -> &'static str {
        match self {
            Control::Play => "play",
            Control::Stop => "stop",
            Control::Previous => "previous",
            Control::Next => "next",
            Control::Favorite => "favorite",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonState {
    pub control: Control,
    pub rect: Rect,
    pub alpha: u8,
}

/// The row of control buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlBar {
    buttons: Vec<ButtonState>,
}

impl ControlBar {
    /// One opaque button per control, placed at `rects` (same order as [`Control::ALL`]).
    pub fn new(rects: &[Rect]) -> Self {
        let buttons = Control::ALL
            .iter()
            .zip(rects)
            .map(|(&control, &rect)| ButtonState { control, rect, alpha: OPAQUE })
            .collect();
        Self { buttons }
    }

    /// Move buttons to new rects, keeping their alpha.
    pub fn relayout(&mut self, rects: &[Rect]) {
        for (button, &rect) in self.buttons.iter_mut().zip(rects) {
            button.rect = rect;
        }
    }

    /// Control under `pos`, if any.
    pub fn hit_test(&self, pos: Pos2) -> Option<Control> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(pos))
            .map(|b| b.control)
    }

    pub fn get(&self, control: Control) -> Option<&ButtonState> {
        self.buttons.iter().find(|b| b.control == control)
    }

    pub fn buttons(&self) -> &[ButtonState] {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut [ButtonState] {
        &mut self.buttons
    }
}
