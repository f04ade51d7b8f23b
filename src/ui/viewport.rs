//! Viewport scroll model — fractional column offset along the slide
//! strip, with exponential ease-out toward a target.
//!
//! Programmatic navigation sets a target and the offset glides toward
//! it a fraction per frame; manual wheel/drag moves the offset (and the
//! target with it) immediately, so the viewport leads and the index is
//! reconciled from the observed position.

/// Scroll state of the slide strip, in terminal columns.
#[derive(Debug, Clone)]
pub struct ViewportScroll {
    offset: f64,
    target: f64,
    /// Damping: `offset += (target - offset) * speed` each tick.
    /// Good range: 0.25–0.45 at ~30 fps.
    speed: f64,
}

impl ViewportScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Current scroll offset in columns.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Begin a smooth scroll toward `target` columns.
    pub fn scroll_to(&mut self, target: f64) {
        self.target = target.max(0.0);
    }

    /// Manual scroll by `delta` columns, clamped to `[0, max]`. Takes
    /// effect immediately — no animation.
    pub fn scroll_by(&mut self, delta: f64, max: f64) {
        let next = (self.offset + delta).clamp(0.0, max.max(0.0));
        self.offset = next;
        self.target = next;
    }

    /// Re-derive the offset from the logical index after a resize.
    pub fn rebase(&mut self, index: usize, viewport_width: f64) {
        let at = index as f64 * viewport_width;
        self.offset = at;
        self.target = at;
    }

    /// Advance the animation one frame. Returns `true` when the offset
    /// moved, so the caller can emit a scroll notification.
    pub fn tick(&mut self) -> bool {
        let residual = self.target - self.offset;
        if residual == 0.0 {
            return false;
        }
        if residual.abs() < 0.5 {
            self.offset = self.target;
        } else {
            self.offset += residual * self.speed;
        }
        true
    }

    /// True while the offset is still gliding toward the target.
    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_scroll_converges_on_the_target() {
        let mut vp = ViewportScroll::new(0.35);
        vp.scroll_to(160.0);
        let mut frames = 0;
        while vp.tick() {
            frames += 1;
            assert!(frames < 200, "animation never settled");
        }
        assert_eq!(vp.offset(), 160.0);
        assert!(!vp.is_animating());
    }

    #[test]
    fn each_frame_moves_monotonically_toward_the_target() {
        let mut vp = ViewportScroll::new(0.3);
        vp.scroll_to(100.0);
        let mut prev = vp.offset();
        for _ in 0..10 {
            vp.tick();
            assert!(vp.offset() > prev);
            assert!(vp.offset() <= 100.0);
            prev = vp.offset();
        }
    }

    #[test]
    fn manual_scroll_is_immediate_and_clamped() {
        let mut vp = ViewportScroll::new(0.35);
        vp.scroll_by(50.0, 240.0);
        assert_eq!(vp.offset(), 50.0);
        assert!(!vp.is_animating());

        vp.scroll_by(-500.0, 240.0);
        assert_eq!(vp.offset(), 0.0);

        vp.scroll_by(9999.0, 240.0);
        assert_eq!(vp.offset(), 240.0);
    }

    #[test]
    fn rebase_snaps_to_the_index_position() {
        let mut vp = ViewportScroll::new(0.35);
        vp.scroll_to(300.0);
        vp.tick();
        vp.rebase(2, 72.0);
        assert_eq!(vp.offset(), 144.0);
        assert!(!vp.is_animating());
    }
}
