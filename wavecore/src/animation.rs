//! Button fade animation
//!
//! The most recently pressed control fades in from transparent to opaque
//! with a linear ramp. Every other button is dimmed to half alpha the
//! moment a different control becomes active.

use crate::controls::{ButtonState, Control, OPAQUE};
use std::time::{Duration, Instant};

/// Duration of the fade-in ramp.
pub const FADE_DURATION: Duration = Duration::from_millis(250);

/// Alpha of inactive buttons once some control has been pressed.
pub const DIMMED_ALPHA: u8 = 127;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeState {
    Idle,
    Fading { started: Instant },
}

/// Tracks the active control and drives its fade.
#[derive(Debug, Clone)]
pub struct FadeController {
    active: Option<Control>,
    state: FadeState,
    duration: Duration,
}

impl Default for FadeController {
    fn default() -> Self {
        Self::new(FADE_DURATION)
    }
}

impl FadeController {
    pub fn new(duration: Duration) -> Self {
        Self {
            active: None,
            state: FadeState::Idle,
            duration,
        }
    }

    pub fn active(&self) -> Option<Control> {
        self.active
    }

    pub fn state(&self) -> FadeState {
        self.state
    }

    pub fn is_fading(&self) -> bool {
        matches!(self.state, FadeState::Fading { .. })
    }

    /// Make `control` the active button and restart the fade.
    ///
    /// Pressing the control that is already active does nothing and
    /// returns `false`.
    pub fn activate(&mut self, control: Control, now: Instant, buttons: &mut [ButtonState]) -> bool {
        if self.active == Some(control) {
            return false;
        }
        for button in buttons.iter_mut() {
            button.alpha = if button.control == control { 0 } else { DIMMED_ALPHA };
        }
        self.active = Some(control);
        self.state = FadeState::Fading { started: now };
        tracing::debug!(?control, "fade started");
        true
    }

    /// Advance the active button's alpha. Stops writing once the ramp completes.
    pub fn update(&mut self, now: Instant, buttons: &mut [ButtonState]) {
        let FadeState::Fading { started } = self.state else {
            return;
        };
        let Some(active) = self.active else {
            self.state = FadeState::Idle;
            return;
        };

        let elapsed = now.saturating_duration_since(started);
        let alpha = fade_alpha(elapsed, self.duration);
        if let Some(button) = buttons.iter_mut().find(|b| b.control == active) {
            button.alpha = alpha;
        }
        if elapsed >= self.duration {
            self.state = FadeState::Idle;
        }
    }
}

/// Linear 0..=255 ramp over `duration`, clamped at both ends.
pub fn fade_alpha(elapsed: Duration, duration: Duration) -> u8 {
    if duration.is_zero() || elapsed >= duration {
        return OPAQUE;
    }
    let t = elapsed.as_secs_f32() / duration.as_secs_f32();
    (lerp(0.0, OPAQUE as f32, t).round() as u32).min(OPAQUE as u32) as u8
}

/// Linear interpolation between two values
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ControlBar;
    use crate::layout::ButtonLayout;
    use egui::vec2;

    fn bar() -> ControlBar {
        let scene = ButtonLayout::default().scene(vec2(600.0, 800.0), Control::ALL.len());
        ControlBar::new(&scene.buttons)
    }

    fn alpha(bar: &ControlBar, control: Control) -> u8 {
        bar.get(control).unwrap().alpha
    }

    #[test]
    fn ramp_endpoints() {
        assert_eq!(fade_alpha(Duration::ZERO, FADE_DURATION), 0);
        assert_eq!(fade_alpha(FADE_DURATION, FADE_DURATION), 255);
        assert_eq!(fade_alpha(Duration::from_secs(5), FADE_DURATION), 255);
        assert_eq!(fade_alpha(Duration::from_millis(125), FADE_DURATION), 128);
    }

    #[test]
    fn ramp_is_monotonic() {
        let mut last = 0;
        for ms in 0..=300 {
            let a = fade_alpha(Duration::from_millis(ms), FADE_DURATION);
            assert!(a >= last, "alpha dropped at {ms}ms");
            last = a;
        }
        assert_eq!(last, 255);
    }

    #[test]
    fn activation_dims_others() {
        let mut bar = bar();
        let mut fade = FadeController::default();
        let t0 = Instant::now();

        assert!(fade.activate(Control::Next, t0, bar.buttons_mut()));
        assert_eq!(alpha(&bar, Control::Next), 0);
        for control in [Control::Play, Control::Stop, Control::Previous, Control::Favorite] {
            assert_eq!(alpha(&bar, control), DIMMED_ALPHA);
        }
        assert!(fade.is_fading());
    }

    #[test]
    fn update_ramps_then_goes_idle() {
        let mut bar = bar();
        let mut fade = FadeController::default();
        let t0 = Instant::now();
        fade.activate(Control::Play, t0, bar.buttons_mut());

        fade.update(t0, bar.buttons_mut());
        assert_eq!(alpha(&bar, Control::Play), 0);

        fade.update(t0 + Duration::from_millis(100), bar.buttons_mut());
        assert_eq!(alpha(&bar, Control::Play), 102);
        assert_eq!(alpha(&bar, Control::Stop), DIMMED_ALPHA);

        fade.update(t0 + Duration::from_millis(400), bar.buttons_mut());
        assert_eq!(alpha(&bar, Control::Play), 255);
        assert_eq!(fade.state(), FadeState::Idle);

        // no more writes once idle
        bar.buttons_mut()[0].alpha = 42;
        fade.update(t0 + Duration::from_secs(1), bar.buttons_mut());
        assert_eq!(bar.buttons()[0].alpha, 42);
    }

    #[test]
    fn same_control_does_not_restart() {
        let mut bar = bar();
        let mut fade = FadeController::default();
        let t0 = Instant::now();
        fade.activate(Control::Stop, t0, bar.buttons_mut());
        fade.update(t0 + Duration::from_millis(300), bar.buttons_mut());

        assert!(!fade.activate(Control::Stop, t0 + Duration::from_millis(310), bar.buttons_mut()));
        assert_eq!(alpha(&bar, Control::Stop), 255);
        assert_eq!(fade.state(), FadeState::Idle);
    }

    #[test]
    fn switching_control_restarts() {
        let mut bar = bar();
        let mut fade = FadeController::default();
        let t0 = Instant::now();
        fade.activate(Control::Stop, t0, bar.buttons_mut());
        fade.update(t0 + Duration::from_millis(300), bar.buttons_mut());

        let t1 = t0 + Duration::from_millis(500);
        assert!(fade.activate(Control::Play, t1, bar.buttons_mut()));
        assert_eq!(alpha(&bar, Control::Stop), DIMMED_ALPHA);
        assert_eq!(alpha(&bar, Control::Play), 0);
        assert_eq!(fade.active(), Some(Control::Play));
    }
}
