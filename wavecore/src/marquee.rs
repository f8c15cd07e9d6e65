//! Scrolling track-name label.
//!
//! The offset grows by a fixed step every frame, so the scroll speed
//! follows the frame rate. Once the text has fully left the window the
//! offset wraps back so the text re-enters from the other side.

/// Per-frame increment of the scroll offset.
pub const MARQUEE_STEP: f32 = 0.03;

/// Slack added past the text width before wrapping, and the value wrapped to (negated).
pub const MARQUEE_GAP: f32 = 500.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Marquee {
    offset: f32,
    step: f32,
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new(MARQUEE_STEP)
    }
}

impl Marquee {
    pub fn new(step: f32) -> Self {
        Self { offset: 0.0, step }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Advance one frame for a label `text_width` wide.
    pub fn advance(&mut self, text_width: f32) {
        self.offset += self.step;
        if self.offset > text_width + MARQUEE_GAP {
            self.offset = -MARQUEE_GAP;
        }
    }

    /// Left edge of the label for a window centred on `center_x`.
    pub fn x(&self, center_x: f32) -> f32 {
        center_x - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_step() {
        let mut m = Marquee::default();
        m.advance(200.0);
        m.advance(200.0);
        assert!((m.offset() - 0.06).abs() < 1e-6);
        assert!((m.x(300.0) - 299.94).abs() < 1e-4);
    }

    #[test]
    fn wraps_to_exactly_minus_gap() {
        let mut m = Marquee::new(1.0);
        m.set_offset(700.5);
        m.advance(200.0);
        assert_eq!(m.offset(), -500.0);
        m.advance(200.0);
        assert_eq!(m.offset(), -499.0);
    }

    #[test]
    fn offset_past_threshold_wraps_next_frame() {
        // a shorter track name can leave the offset beyond the new threshold
        let mut m = Marquee::default();
        m.set_offset(900.0);
        m.advance(100.0);
        assert_eq!(m.offset(), -500.0);
    }

    #[test]
    fn at_threshold_does_not_wrap() {
        let mut m = Marquee::new(1.0);
        m.set_offset(699.0);
        m.advance(200.0);
        assert_eq!(m.offset(), 700.0);
    }
}
