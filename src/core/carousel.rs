//! Carousel controller — the bounded index, the autoplay flag, and the
//! single transition function everything funnels through.
//!
//! Two position signals exist: the logical index and the viewport's
//! scroll offset. During programmatic navigation the index leads and a
//! [`Effect::ScrollToSlide`] asks the viewport to follow; during manual
//! scrolling the offset leads and [`CarouselEvent::ViewportScrolled`]
//! reconciles the index back. Both paths converge on the same value,
//! so a scroll notification arriving after a `GoTo` re-derives the
//! index that was just set instead of fighting it.
//!
//! Boundary policy is asymmetric on purpose: manual stepping clamps at
//! the ends, the autoplay tick wraps from the last slide to the first.

use thiserror::Error;

/// Construction failures. Out-of-range indices are never errors (they
/// are clamped); only an empty slide sequence is rejected.
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel requires at least one slide")]
    Empty,
}

/// Direction for manual stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Everything that can happen to the carousel, from any input source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// Previous/next control pressed.
    Step(Direction),
    /// A dot control pressed (carries the target index).
    GoTo(usize),
    /// The viewport's scroll position changed — programmatic animation
    /// frames and manual wheel/drag both land here.
    ViewportScrolled { offset: f64, viewport_width: f64 },
    /// Pointer entered the carousel surface.
    PointerEnter,
    /// Pointer left the carousel surface.
    PointerLeave,
    /// The recurring autoplay timer fired.
    AutoplayTick,
}

/// Side effect requested by a transition. The embedding layer turns
/// this into a smooth scroll to `index × viewport_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub scroll_to_slide: usize,
}

/// The controller state: a bounded counter plus the autoplay flag.
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    autoplay_enabled: bool,
    len: usize,
}

impl Carousel {
    /// Build a controller over `len` slides. `initial_index` is clamped
    /// into range; `len == 0` is refused.
    pub fn new(len: usize, initial_index: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            index: initial_index.min(len - 1),
            autoplay_enabled: true,
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    /// Enable or disable autoplay directly (CLI `--no-autoplay`,
    /// keyboard toggle). Pointer events go through [`apply`].
    ///
    /// [`apply`]: Carousel::apply
    pub fn set_autoplay_enabled(&mut self, enabled: bool) {
        self.autoplay_enabled = enabled;
    }

    /// Apply one event. Returns the scroll request to execute, if the
    /// transition produced one.
    pub fn apply(&mut self, event: CarouselEvent) -> Option<Effect> {
        match event {
            CarouselEvent::Step(direction) => {
                let target = match direction {
                    // Clamps — stepping past either end is a no-op,
                    // unlike the autoplay tick below.
                    Direction::Previous => self.index.saturating_sub(1),
                    Direction::Next => (self.index + 1).min(self.len - 1),
                };
                self.go_to(target)
            }
            CarouselEvent::GoTo(target) => self.go_to(target),
            CarouselEvent::ViewportScrolled {
                offset,
                viewport_width,
            } => {
                self.reconcile(offset, viewport_width);
                None
            }
            CarouselEvent::PointerEnter => {
                self.autoplay_enabled = false;
                None
            }
            CarouselEvent::PointerLeave => {
                self.autoplay_enabled = true;
                None
            }
            CarouselEvent::AutoplayTick => {
                // The timer is disarmed while paused; a stray tick that
                // raced a pointer-enter must still not advance.
                if !self.autoplay_enabled {
                    return None;
                }
                let next = if self.index == self.len - 1 {
                    0 // wraps — the one place the boundary is crossed
                } else {
                    self.index + 1
                };
                self.go_to(next)
            }
        }
    }

    /// Clamp `target`, set the index optimistically (before any
    /// animation completes) and request the scroll.
    fn go_to(&mut self, target: usize) -> Option<Effect> {
        let target = target.min(self.len - 1);
        self.index = target;
        Some(Effect {
            scroll_to_slide: target,
        })
    }

    /// Re-derive the index from an observed scroll offset. Keeps the
    /// index consistent with free scrolling/dragging; also fed by the
    /// animation frames of programmatic scrolls.
    fn reconcile(&mut self, offset: f64, viewport_width: f64) {
        if viewport_width <= 0.0 {
            return;
        }
        let raw = (offset / viewport_width).round();
        let clamped = raw.clamp(0.0, (self.len - 1) as f64);
        self.index = clamped as usize;
    }
}
