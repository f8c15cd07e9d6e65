//! Repaint scheduling
//!
//! egui only repaints on input unless asked. The marquee and fade need a
//! steady frame clock, so while either is running the controller keeps
//! requesting frames; when nothing moves the window sleeps until input.

use std::time::Duration;

/// Frame interval while animating (~60 Hz).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct RepaintController {
    continuous: bool,
    interval: Duration,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            continuous: false,
            interval: FRAME_INTERVAL,
        }
    }

    /// Keep scheduling frames until called with `false`.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    /// Call at the end of `update()`.
    pub fn end_frame(&self, ctx: &egui::Context) {
        if self.continuous {
            ctx.request_repaint_after(self.interval);
        }
    }
}
